// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

///////////////////////////////////////////////////////////////////////

use super::*;

const BOOK_ID: BookId = BookId::new(5);

fn record(
    reference_number: &str,
    title: &str,
    rhythm: &str,
    key_signature: &str,
    content: &str,
) -> TuneRecord {
    TuneRecord {
        book_id: BOOK_ID,
        reference_number: reference_number.to_owned(),
        title: title.to_owned(),
        rhythm: rhythm.to_owned(),
        key_signature: key_signature.to_owned(),
        content: content.to_owned(),
    }
}

#[test]
fn two_tunes_in_one_file() {
    let text = "X:1\nT:First Tune\nR:Jig\nK:Gmaj\nX:2\nT:Second Tune\n";
    assert_eq!(
        vec![
            record(
                "1",
                "First Tune",
                "Jig",
                "Gmaj",
                "X:1\nT:First Tune\nR:Jig\nK:Gmaj\n"
            ),
            record(
                "2",
                "Second Tune",
                "Unknown",
                "Unknown",
                "X:2\nT:Second Tune\n"
            ),
        ],
        parse(text, BOOK_ID)
    );
}

#[test]
fn one_record_per_marker() {
    let text = "X:1\nX:2\n\nX:3\nT:Three\nX:4";
    let records = parse(text, BOOK_ID);
    assert_eq!(4, records.len());
    assert_eq!(
        vec!["1", "2", "3", "4"],
        records
            .iter()
            .map(|record| record.reference_number.as_str())
            .collect::<Vec<_>>()
    );
}

#[test]
fn empty_input() {
    assert!(parse("", BOOK_ID).is_empty());
    assert!(parse("\n \n\t\n", BOOK_ID).is_empty());
}

#[test]
fn marker_only_uses_defaults() {
    assert_eq!(
        vec![record("12", "Unknown", "Unknown", "Unknown", "X:12\n")],
        parse("X:12", BOOK_ID)
    );
}

#[test]
fn first_title_wins() {
    let records = parse("X:1\nT:Alpha\nT:Beta\n", BOOK_ID);
    assert_eq!(1, records.len());
    assert_eq!("Alpha", records[0].title);
    // Both title lines are kept in the content
    assert_eq!("X:1\nT:Alpha\nT:Beta\n", records[0].content);
}

#[test]
fn last_rhythm_and_key_win() {
    let records = parse("X:1\nR:Jig\nK:Gmaj\nR:Reel\nK:Dmaj\n", BOOK_ID);
    assert_eq!(1, records.len());
    assert_eq!("Reel", records[0].rhythm);
    assert_eq!("Dmaj", records[0].key_signature);
}

#[test]
fn discard_lines_before_first_marker() {
    let text = "%abc-2.1\nT:Not a tune\nK:C\nX:7\nT:Tune\n";
    assert_eq!(
        vec![record("7", "Tune", "Unknown", "Unknown", "X:7\nT:Tune\n")],
        parse(text, BOOK_ID)
    );
}

#[test]
fn no_marker_no_records() {
    assert!(parse("T:Orphan\nK:G\nabc|def|\n", BOOK_ID).is_empty());
}

#[test]
fn flush_final_record_without_trailing_newline() {
    let records = parse("X:1\nT:One\nX:2\nT:Two\n|:GAB cde:|", BOOK_ID);
    assert_eq!(2, records.len());
    assert_eq!("X:2\nT:Two\n|:GAB cde:|\n", records[1].content);
}

#[test]
fn trim_lines_and_skip_blank_lines() {
    let text = "  X: 3 \r\n\r\n\tT:  Spaced Title  \n   \nK: Ador\r\n";
    assert_eq!(
        vec![record(
            "3",
            "Spaced Title",
            "Unknown",
            "Ador",
            "X: 3\nT:  Spaced Title\nK: Ador\n"
        )],
        parse(text, BOOK_ID)
    );
}

#[test]
fn carriage_return_line_endings() {
    let records = parse("X:1\rT:Tune\rK:G\rX:2\r", BOOK_ID);
    assert_eq!(
        vec![
            record("1", "Tune", "Unknown", "G", "X:1\nT:Tune\nK:G\n"),
            record("2", "Unknown", "Unknown", "Unknown", "X:2\n"),
        ],
        records
    );
}

#[test]
fn mixed_line_endings() {
    let records = parse("X:1\r\nT:One\rR:Reel\nX:2\r\rT:Two", BOOK_ID);
    assert_eq!(2, records.len());
    assert_eq!("X:1\nT:One\nR:Reel\n", records[0].content);
    assert_eq!("Reel", records[0].rhythm);
    assert_eq!("Two", records[1].title);
}

#[test]
fn keep_unrecognized_lines_in_content() {
    let text = "X:1\nT:Tune\nM:6/8\nL:1/8\nC:Trad.\nK:G\n|:GAG GAB|ABA ABd:|\n";
    let records = parse(text, BOOK_ID);
    assert_eq!(1, records.len());
    assert_eq!(text, records[0].content);
    assert_eq!("Unknown", records[0].rhythm);
    assert_eq!("G", records[0].key_signature);
}

#[test]
fn content_reproduces_source_lines() {
    let text = "X:1\nT:A\n\nK:D\nabc\nX:2\nT:B\ndef\n";
    let records = parse(text, BOOK_ID);
    let content = records
        .iter()
        .map(|record| record.content.as_str())
        .collect::<String>();
    let expected = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(String::new(), |mut expected, line| {
            expected.push_str(line);
            expected.push('\n');
            expected
        });
    assert_eq!(expected, content);
    for record in &records {
        assert!(record.content.starts_with("X:"));
        let marker_line = format!("X:{}", record.reference_number);
        assert_eq!(Some(marker_line.as_str()), record.marker_line());
    }
}

#[test]
fn headers_do_not_leak_into_next_record() {
    let records = parse("X:1\nT:One\nR:Reel\nK:D\nX:2\n", BOOK_ID);
    assert_eq!(
        record("2", "Unknown", "Unknown", "Unknown", "X:2\n"),
        records[1]
    );
}

#[test]
fn empty_reference_number() {
    let records = parse("X:\nT:Nameless\n", BOOK_ID);
    assert_eq!(1, records.len());
    assert_eq!("", records[0].reference_number);
    assert_eq!("Nameless", records[0].title);
}

#[test]
fn value_after_first_colon_only() {
    let records = parse("X:1\nT:Reel: The Sailor's Bonnet\n", BOOK_ID);
    assert_eq!("Reel: The Sailor's Bonnet", records[0].title);
}

#[test]
fn prefixes_are_case_sensitive() {
    let records = parse("x:1\nX:2\nt:lower\nr:lower\nk:lower\n", BOOK_ID);
    assert_eq!(
        vec![record(
            "2",
            "Unknown",
            "Unknown",
            "Unknown",
            "X:2\nt:lower\nr:lower\nk:lower\n"
        )],
        records
    );
}

#[test]
fn incremental_parser_state() {
    let mut parser = TuneRecordParser::new(BOOK_ID);
    assert!(!parser.is_inside_record());
    parser.feed_line("T:Ignored");
    assert!(!parser.is_inside_record());
    parser.feed_line("X:1");
    assert!(parser.is_inside_record());
    assert_eq!(0, parser.finished_records());
    parser.feed_line("");
    assert!(parser.is_inside_record());
    parser.feed_line("X:2");
    assert_eq!(1, parser.finished_records());
    let records = parser.finish();
    assert_eq!(2, records.len());
}

#[test]
fn book_id_is_propagated() {
    let book_id = BookId::new(-1);
    let records = parse("X:1\nX:2\n", book_id);
    assert!(records.iter().all(|record| record.book_id == book_id));
}
