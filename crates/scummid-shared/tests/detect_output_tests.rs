//! Tests for parsing captured `scummvm --detect` output end to end.

use scummid_shared::*;

const HEADING: &str = "GameID                         Description                                                Full Path";
const RULE: &str = "------------------------------ ---------------------------------------------------------- ---------------------------------------------------------";

fn table(rows: &[&str]) -> String {
    let mut lines = vec![HEADING, RULE];
    lines.extend_from_slice(rows);
    lines.join("\n") + "\n"
}

#[test]
fn test_not_found_warning() {
    let raw = "WARNING: ScummVM could not find any game in G:\\example\\SCUMMVM\\\n\
               WARNING: Consider using --recursive to search inside subdirectories\n";
    assert_eq!(parse_detect_output(raw), Err(ParseFailure::NotFound));
}

#[test]
fn test_not_found_takes_precedence_over_table() {
    let mut raw = table(&["scumm:loom                     Loom (VGA/DOS/English)                                     G:\\example\\Loom\\"]);
    raw.push_str("WARNING: ScummVM could not find any game in G:\\example\\other\\\n");
    assert_eq!(parse_detect_output(&raw), Err(ParseFailure::NotFound));
}

#[test]
fn test_single_row() {
    let raw = table(&["scumm:loom    Loom (VGA/DOS/English)    G:\\example\\Loom\\"]);
    let m = parse_detect_output(&raw).unwrap();
    assert_eq!(
        m,
        GameMatch {
            identifier: "scumm:loom".to_string(),
            description: "Loom (VGA/DOS/English)".to_string(),
        }
    );
}

#[test]
fn test_single_row_is_returned_verbatim_even_if_dissimilar() {
    let raw = table(&["scumm:loom    Loom (VGA/DOS/English)    /games/Completely Different Name/"]);
    let m = parse_detect_output(&raw).unwrap();
    assert_eq!(m.identifier, "scumm:loom");
    assert_eq!(m.description, "Loom (VGA/DOS/English)");
}

#[test]
fn test_missing_heading() {
    let raw = format!("{RULE}\nscumm:loom    Loom    /games/loom\n");
    assert_eq!(parse_detect_output(&raw), Err(ParseFailure::NoTableFound));
}

#[test]
fn test_missing_rule() {
    let raw = format!("{HEADING}\nscumm:loom    Loom    /games/loom\n");
    assert_eq!(parse_detect_output(&raw), Err(ParseFailure::NoTableFound));
}

#[test]
fn test_version_banner_is_not_a_table() {
    let raw = "ScummVM 2.7.0 (Feb 14 2023 14:26:43)\nFeatures compiled in: Vorbis FLAC MP3\n";
    assert_eq!(parse_detect_output(raw), Err(ParseFailure::NoTableFound));
}

#[test]
fn test_empty_output() {
    assert_eq!(parse_detect_output(""), Err(ParseFailure::NoTableFound));
}

#[test]
fn test_rows_without_three_fields() {
    let raw = table(&["scumm:loom Loom /games/loom", "", "   "]);
    assert_eq!(parse_detect_output(&raw), Err(ParseFailure::EmptyCandidateSet));
}

#[test]
fn test_description_with_single_spaces() {
    let raw = table(&["scumm:loom                     Loom (VGA/DOS/English)                                     G:\\example\\scummvm\\Loom (CD DOS VGA)\\"]);
    let rows = extract_candidates(&raw).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Loom (VGA/DOS/English)");
    assert_eq!(rows[0].source_path, "G:\\example\\scummvm\\Loom (CD DOS VGA)\\");
}

#[test]
fn test_trailing_blank_lines_add_nothing() {
    let raw = table(&["scumm:loom    Loom    /games/loom", "", "", ""]);
    assert_eq!(extract_candidates(&raw).unwrap().len(), 1);
}

#[test]
fn test_crlf_and_lf_parse_identically() {
    let rows = [
        "director:iwave                 Interactive Wave (Issue 1/Macintosh/English)               G:\\example\\SCUMMVM\\Astro Chicken (Floppy DOS)\\",
        "sci:astrochicken               Astro Chicken (DOS/English)                                G:\\example\\SCUMMVM\\Astro Chicken (Floppy DOS)\\",
    ];
    let lf = table(&rows);
    let crlf = lf.replace('\n', "\r\n");

    let from_lf = extract_candidates(&lf).unwrap();
    let from_crlf = extract_candidates(&crlf).unwrap();
    assert_eq!(from_lf, from_crlf);
    assert_eq!(from_lf.len(), 2);
    assert_eq!(parse_detect_output(&lf), parse_detect_output(&crlf));
}

#[test]
fn test_identical_scores_pick_earlier_row() {
    let raw = table(&[
        "scumm:loom-ega    Loom    /games/Loom/",
        "scumm:loom-vga    Loom    /games/Loom/",
    ]);
    assert_eq!(parse_detect_output(&raw).unwrap().identifier, "scumm:loom-ega");
}

#[test]
fn test_unknown_variant_picks_closest_description() {
    let raw = "The game in 'Astro Chicken (Floppy DOS)\\' seems to be an unknown game variant.\r\n\
\r\n\
Please report the following data to the ScummVM team at\r\n\
https://bugs.scummvm.org/ along with the name of the game you tried to add and\r\n\
its version, language, etc.:\r\n\
\r\n\
Matched game IDs for the director engine: iwave-mac\r\n\
\r\n\
  {\"!\", 0, \"d:52807765c2438df92ebf1ab1fdbe6dfc\", 1792},\r\n\
\r\n\
GameID                         Description                                                Full Path\r\n\
------------------------------ ---------------------------------------------------------- ---------------------------------------------------------\r\n\
director:iwave                 Interactive Wave (Issue 1/Macintosh/English)               G:\\example\\SCUMMVM\\Astro Chicken (Floppy DOS)\\\r\n\
sci:astrochicken               Astro Chicken (DOS/English)                                G:\\example\\SCUMMVM\\Astro Chicken (Floppy DOS)\\\r\n";

    let m = parse_detect_output(raw).unwrap();
    assert_eq!(m.identifier, "sci:astrochicken");
    assert_eq!(m.description, "Astro Chicken (DOS/English)");
}

#[test]
fn test_scores_are_reported_per_row() {
    let raw = table(&[
        "director:iwave      Interactive Wave (Issue 1/Macintosh/English)      /g/Astro Chicken (Floppy DOS)/",
        "sci:astrochicken    Astro Chicken (DOS/English)                       /g/Astro Chicken (Floppy DOS)/",
    ]);
    let rows = extract_candidates(&raw).unwrap();
    let d = Disambiguator::default();
    let scored = d.score_all(&rows);

    assert_eq!(scored.len(), 2);
    assert_eq!(scored[1].index, 1);
    let first = scored[0].score.unwrap();
    let second = scored[1].score.unwrap();
    assert!(second > first);
    assert!((0.0..=1.0).contains(&first));
    assert!((0.0..=1.0).contains(&second));
}

#[test]
fn test_second_table_rows_are_read_as_data() {
    let raw = table(&[
        "scumm:loom    Loom    /games/Loom/",
        HEADING,
        RULE,
        "scumm:monkey    Monkey Island    /games/Monkey Island/",
    ]);
    let rows = extract_candidates(&raw).unwrap();
    let ids: Vec<&str> = rows.iter().map(|c| c.identifier.as_str()).collect();
    assert_eq!(ids, vec!["scumm:loom", "GameID", "scumm:monkey"]);
}
