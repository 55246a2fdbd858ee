//! End-to-end pipeline properties.

use sentrank::{Strategy, Summarizer, SummaryLength, SummaryStyle};

const PETS: &str = "Cats are great. Dogs are great too. Cats and dogs are pets.";

fn textrank(length: SummaryLength) -> Summarizer {
    Summarizer::new()
        .with_strategy(Strategy::Textrank)
        .with_length(length)
}

fn tfisf(length: SummaryLength) -> Summarizer {
    Summarizer::new()
        .with_strategy(Strategy::TfIsf)
        .with_length(length)
}

#[test]
fn identical_input_produces_identical_output() {
    for summarizer in [
        textrank(SummaryLength::Percentage(60.0)),
        tfisf(SummaryLength::Count(2)),
    ] {
        let a = summarizer.summarize(PETS).unwrap();
        let b = summarizer.summarize(PETS).unwrap();
        assert_eq!(
            a.render(SummaryStyle::Lines),
            b.render(SummaryStyle::Lines)
        );
    }
}

#[test]
fn selected_indices_are_strictly_increasing() {
    let text = "Alpha beta gamma. Beta gamma delta. Gamma delta epsilon. \
                Delta epsilon zeta. Epsilon zeta alpha.";
    for summarizer in [
        textrank(SummaryLength::Percentage(60.0)),
        tfisf(SummaryLength::Count(3)),
    ] {
        let summary = summarizer.summarize(text).unwrap();
        for pair in summary.sentences.windows(2) {
            assert!(pair[0].index < pair[1].index);
        }
    }
}

#[test]
fn tfisf_selection_size_is_min_of_k_and_n() {
    assert_eq!(tfisf(SummaryLength::Count(2)).summarize(PETS).unwrap().len(), 2);
    assert_eq!(tfisf(SummaryLength::Count(9)).summarize(PETS).unwrap().len(), 3);
    assert_eq!(tfisf(SummaryLength::Count(0)).summarize(PETS).unwrap().len(), 0);
}

#[test]
fn textrank_selection_size_follows_percentage() {
    // N = 3: ceil(3 * 34 / 100) = 2, ceil(3 * 100 / 100) = 3, 0% = 0.
    assert_eq!(
        textrank(SummaryLength::Percentage(34.0)).summarize(PETS).unwrap().len(),
        2
    );
    assert_eq!(
        textrank(SummaryLength::Percentage(100.0)).summarize(PETS).unwrap().len(),
        3
    );
    assert_eq!(
        textrank(SummaryLength::Percentage(0.0)).summarize(PETS).unwrap().len(),
        0
    );
}

#[test]
fn tfisf_pets_example_selects_the_distinctive_sentences() {
    // "are" occurs in all three sentences (count == sentence count) so it
    // weighs zero; "too" and "pets" are the count-1 terms that push the
    // second and third sentences above the first.
    let summary = tfisf(SummaryLength::Count(2)).summarize(PETS).unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary.sentences[0].text, "Dogs are great too.");
    assert_eq!(summary.sentences[1].text, "Cats and dogs are pets.");
}

#[test]
fn empty_input_yields_empty_summary() {
    for pct in [0.0, 25.0, 100.0] {
        let summary = textrank(SummaryLength::Percentage(pct)).summarize("").unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.num_source_sentences, 0);
        assert_eq!(summary.render(SummaryStyle::Lines), "Summary:\n\n");
    }
}

#[test]
fn single_sentence_is_always_selected() {
    let text = "Cats are great.";
    let summary = tfisf(SummaryLength::Count(1)).summarize(text).unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary.sentences[0].text, text);

    // Any non-zero percentage rounds up to one sentence.
    let summary = textrank(SummaryLength::Percentage(1.0)).summarize(text).unwrap();
    assert_eq!(summary.len(), 1);
}

#[test]
fn whole_document_summary_reproduces_every_sentence_in_order() {
    let summary = textrank(SummaryLength::Percentage(100.0)).summarize(PETS).unwrap();
    let texts: Vec<&str> = summary.sentences.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Cats are great.",
            "Dogs are great too.",
            "Cats and dogs are pets.",
        ]
    );
}

#[test]
fn strategies_agree_on_degenerate_stopword_only_input() {
    // Every word is a stop word: sentences exist but carry no signal; the
    // pipeline still selects deterministically by index.
    let text = "Of the and. By from up.";
    for summarizer in [
        textrank(SummaryLength::Percentage(50.0)),
        tfisf(SummaryLength::Count(1)),
    ] {
        let summary = summarizer.summarize(text).unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary.sentences[0].index, 0);
    }
}
