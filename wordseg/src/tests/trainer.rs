use crate::dictionary::WordId;
use crate::errors::WordsegError;
use crate::trainer::{FrequencyLexicon, Smoothing, Trainer};

#[test]
fn test_train_cat_dog() {
    let freq = FrequencyLexicon::from_reader("cat 3\ndog 1".as_bytes()).unwrap();
    assert_eq!(freq.word_id("cat"), Some(WordId(0)));
    assert_eq!(freq.word_id("dog"), Some(WordId(1)));

    let dict = Trainer::new().train(&freq).unwrap();
    assert_eq!(dict.lexicon().num_entries(), 2);
    assert_eq!(
        dict.unigram_cost().as_slice(),
        &[-(3f64 / 4.0).ln() as f32, -(1f64 / 4.0).ln() as f32]
    );
}

#[test]
fn test_train_missing_count() {
    let result = FrequencyLexicon::from_reader("cat".as_bytes());
    match result {
        Err(WordsegError::InvalidFormat(e)) => {
            assert!(e.message().contains("line 1"));
            assert!(e.message().contains("cat"));
        }
        _ => panic!("malformed line was accepted"),
    }
}

#[test]
fn test_train_duplicates_accumulate() {
    let freq = FrequencyLexicon::from_reader("猫 1\n犬 2\n猫 1".as_bytes()).unwrap();
    let dict = Trainer::new().train(&freq).unwrap();
    assert_eq!(dict.unigram_cost().len(), 2);
    assert_eq!(dict.unigram_cost().as_slice()[0], dict.unigram_cost().as_slice()[1]);
}

#[test]
fn test_train_zero_count_is_unknown() {
    let freq = FrequencyLexicon::from_reader("猫 4\n犬 0".as_bytes()).unwrap();

    let dict = Trainer::new().train(&freq).unwrap();
    assert_eq!(dict.unigram_cost().get(WordId(1)), None);

    let dict = Trainer::new().smoothing(Smoothing::Laplace).train(&freq).unwrap();
    assert!(dict.unigram_cost().get(WordId(1)).is_some());
    assert!(
        dict.unigram_cost()
            .as_slice()
            .iter()
            .all(|c| c.is_finite())
    );
}

#[test]
fn test_train_empty() {
    let freq = FrequencyLexicon::from_reader("".as_bytes()).unwrap();
    let dict = Trainer::new().train(&freq).unwrap();
    assert_eq!(dict.lexicon().num_entries(), 0);
    assert!(dict.unigram_cost().is_empty());
}
