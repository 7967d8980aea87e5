use terning::tst::Tst;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    // Create our trie
    let mut tst = Tst::new();

    // Insert some graphemes
    let s = "a̐éö̲\r\n";
    let input = s.graphemes(true);
    let count = input.clone().count();
    tst.insert_with_value(input.clone(), Some(count));
    assert!(tst.contains(input.clone()));
    assert!(tst.get(input.clone()).is_some());
    assert_eq!(tst.get(input.clone()), Some(&count));

    // Grapheme clusters are atoms too, so completion works on them:
    // the first cluster completes to the whole stored sequence.
    let completions: Vec<String> = tst.completions(s.graphemes(true).take(1));
    assert_eq!(completions, [s]);
    assert!(tst.contains_prefix(input.take(2)));
}
