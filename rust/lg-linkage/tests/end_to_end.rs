//! Linkages built, merged and post-processed through the public API.

use lg_linkage::{
    ConsistencyChecker, Link, Linkage, ParseOptions, PrecomputedParses, RankedParse, Verdict,
    delete,
};
use nonempty::nonempty;
use pretty_assertions::assert_eq;
use testresult::TestResult;

/// Declines every sublinkage.
#[derive(Default)]
struct Declining {
    closed: usize,
}

impl ConsistencyChecker for Declining {
    type Context = [String];

    fn check(&mut self, _: &[Link], _: &[String], _: &ParseOptions) -> Option<Verdict> {
        None
    }

    fn close_sentence(&mut self) {
        self.closed += 1;
    }
}

/// Tags each link with the first letter of the left word's text, and flags
/// sublinkages that link the word "and".
struct FirstLetter;

impl ConsistencyChecker for FirstLetter {
    type Context = [String];

    fn check(&mut self, links: &[Link], words: &[String], _: &ParseOptions) -> Option<Verdict> {
        let domains = links
            .iter()
            .map(|link| words[link.left_word].chars().take(1).collect())
            .collect();
        let verdict = Verdict::new(domains);
        if links.iter().any(|link| words[link.right_word] == "and") {
            Some(verdict.with_violation(format!("{} links to and", links.len())))
        } else {
            Some(verdict)
        }
    }

    fn close_sentence(&mut self) {}
}

fn fat_options() -> ParseOptions {
    ParseOptions {
        use_fat_linkages: true,
        ..ParseOptions::default()
    }
}

#[test_log::test]
fn a_two_word_sentence_has_one_wall_link() -> TestResult {
    let mut parses = PrecomputedParses::new(["LEFT-WALL", "sing"])
        .with_parse(RankedParse::thin(vec![Link::new(0, 1, "Wd")]));
    let linkage = Linkage::create(0, &mut parses, &ParseOptions::default())?;

    assert_eq!(linkage.num_links(), 1);
    assert_eq!(linkage.link_lword(0), Some(0));
    assert_eq!(linkage.link_rword(0), Some(1));
    assert_eq!(linkage.link_label(0), Some("Wd"));
    assert_eq!(linkage.link_length(0), Some(1));

    delete(Some(linkage));
    Ok(())
}

#[test_log::test]
fn declined_checks_leave_no_domains_behind() -> TestResult {
    let options = fat_options();
    let mut parses = PrecomputedParses::new(["LEFT-WALL", "cats", "and", "dogs", "run"])
        .with_parse(RankedParse::fat(nonempty![
            vec![Link::new(0, 4, "Wd"), Link::new(1, 4, "Sp")],
            vec![Link::new(0, 4, "Wd"), Link::new(3, 4, "Sp")]
        ]));
    let mut linkage = Linkage::create(0, &mut parses, &options)?;
    let words = linkage.words().to_vec();

    linkage.post_process(&mut FirstLetter, words.as_slice(), &options);
    assert_eq!(linkage.link_num_domains(0), Some(1));

    let mut checker = Declining::default();
    for _ in 0..2 {
        linkage.post_process(&mut checker, words.as_slice(), &options);
        for sublinkage in linkage.sublinkages() {
            assert!(sublinkage.domain_table().iter().all(|info| info.is_empty()));
            assert_eq!(sublinkage.violation(), None);
        }
    }
    assert_eq!(checker.closed, 2);
    Ok(())
}

#[test_log::test]
fn the_union_carries_the_first_occurrence_annotation() -> TestResult {
    let options = fat_options();
    let mut parses = PrecomputedParses::new(["LEFT-WALL", "bark", "and", "sing"]).with_parse(
        RankedParse::fat(nonempty![
            vec![Link::new(0, 1, "X"), Link::new(1, 2, "Y")],
            vec![Link::new(0, 1, "X"), Link::new(2, 3, "Z")]
        ]),
    );
    let mut linkage = Linkage::create(0, &mut parses, &options)?;
    let words = linkage.words().to_vec();
    linkage.post_process(&mut FirstLetter, words.as_slice(), &options);

    linkage.compute_union();

    assert_eq!(linkage.num_sublinkages(), 3);
    assert_eq!(linkage.current_sublinkage(), 2);
    let labels: Vec<_> = (0..linkage.num_links())
        .filter_map(|index| linkage.link_label(index))
        .collect();
    assert_eq!(labels, vec!["X", "Y", "Z"]);
    assert_eq!(linkage.link_domain_names(0), Some(&['L'][..]));
    assert_eq!(linkage.link_domain_names(2), Some(&['a'][..]));
    assert_eq!(linkage.violation_name(), Some("2 links to and"));

    // Re-annotating includes the union.
    let mut checker = Declining::default();
    linkage.post_process(&mut checker, words.as_slice(), &options);
    assert_eq!(linkage.violation_name(), None);
    assert_eq!(checker.closed, 1);
    Ok(())
}

#[test]
fn options_select_the_extraction_mode() -> TestResult {
    let options = ParseOptions::from_json(r#"{ "use_fat_linkages": true, "verbosity": 3 }"#)?;
    let mut parses = PrecomputedParses::new(["LEFT-WALL", "bark", "and", "sing"]).with_parse(
        RankedParse::fat(nonempty![vec![Link::new(0, 1, "Wd")], vec![Link::new(0, 3, "Wd")]]),
    );

    let fat = Linkage::create(0, &mut parses, &options)?;
    let thin = Linkage::create(0, &mut parses, &ParseOptions::default())?;
    assert_eq!(fat.num_sublinkages(), 2);
    assert_eq!(thin.num_sublinkages(), 1);
    Ok(())
}
