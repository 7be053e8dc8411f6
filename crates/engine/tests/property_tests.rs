use dnsmasq_domains_engine::processor::extract;
use proptest::prelude::*;
use std::io::Cursor;
use std::path::Path;

/// One input line together with the domain it should yield, if any.
#[derive(Debug, Clone)]
enum Line {
    Directive { domain: String, resolver: String },
    Comment(String),
    Blank(String),
    Junk(String),
}

impl Line {
    fn render(&self) -> String {
        match self {
            Self::Directive { domain, resolver } => format!("server=/{domain}/{resolver}"),
            Self::Comment(text) => format!("#{text}"),
            Self::Blank(ws) => ws.clone(),
            Self::Junk(text) => text.clone(),
        }
    }
}

fn line() -> impl Strategy<Value = Line> {
    prop_oneof![
        ("[a-z0-9-]{1,12}(\\.[a-z]{2,6}){1,3}", "[0-9.#]{0,20}")
            .prop_map(|(domain, resolver)| Line::Directive { domain, resolver }),
        "[ -~]{0,30}".prop_map(Line::Comment),
        "[ \t]{0,4}".prop_map(Line::Blank),
        // never starts with 's', '#' or whitespace, so it cannot be a directive
        "[a-rt-z][a-z0-9=/.]{0,20}".prop_map(Line::Junk),
    ]
}

proptest! {
    #[test]
    fn counts_account_for_every_line(lines in prop::collection::vec(line(), 0..60)) {
        let input: String = lines.iter().map(|l| l.render() + "\n").collect();
        let extraction = extract(Cursor::new(input), Path::new("<prop>"), false).unwrap();

        prop_assert_eq!(extraction.total_lines, lines.len());
        prop_assert_eq!(
            extraction.processed() + extraction.skipped() + extraction.ignored,
            extraction.total_lines
        );
    }

    #[test]
    fn domains_are_extracted_exactly_and_in_order(lines in prop::collection::vec(line(), 0..60)) {
        let input: String = lines.iter().map(|l| l.render() + "\n").collect();
        let extraction = extract(Cursor::new(input), Path::new("<prop>"), false).unwrap();

        let expected: Vec<&str> = lines
            .iter()
            .filter_map(|l| match l {
                Line::Directive { domain, .. } => Some(domain.as_str()),
                _ => None,
            })
            .collect();
        prop_assert_eq!(extraction.domains, expected);
    }

    #[test]
    fn junk_lines_are_reported_with_their_line_number(lines in prop::collection::vec(line(), 1..60)) {
        let input: String = lines.iter().map(|l| l.render() + "\n").collect();
        let extraction = extract(Cursor::new(input), Path::new("<prop>"), false).unwrap();

        let expected: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| matches!(l, Line::Junk(_)))
            .map(|(idx, _)| idx + 1)
            .collect();
        let reported: Vec<usize> = extraction.malformed.iter().map(|m| m.line_number).collect();
        prop_assert_eq!(reported, expected);
    }
}
