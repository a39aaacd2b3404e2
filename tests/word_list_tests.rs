use rstest::rstest;
use Wordsectx::{DocumentWordList, ErrorKind, IntersectionApproach, IntersectionEngine, IntersectionMode};

// =============================================================================
// Container
// =============================================================================

#[rstest]
fn third_document_into_two_slot_list_is_rejected() {
    let mut list = DocumentWordList::new(2, 5).unwrap();
    list.append(&[3, 7, 3, 9]).unwrap();
    list.append(&[1, 2, 3]).unwrap();

    let err = list.append(&[4]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::CapacityExceeded { value: 3, limit: 2 });
    assert_eq!(list.len(), 2);
}

#[rstest]
#[case(1, 1)]
#[case(3, 2)]
#[case(5, 5)]
fn appended_words_read_back_unchanged(#[case] documents: usize, #[case] words_per_document: usize) {
    let mut list = DocumentWordList::new(documents, words_per_document).unwrap();
    let expected: Vec<Vec<u32>> = (0..documents)
        .map(|doc| (0..words_per_document as u32).map(|w| w + doc as u32 * 10).collect())
        .collect();

    for words in &expected {
        list.append(words).unwrap();
    }

    let read: Vec<(usize, Vec<u32>)> = list.iter().map(|(slot, words)| (slot, words.to_vec())).collect();
    assert_eq!(read.len(), documents);
    for (slot, words) in read {
        assert_eq!(words, expected[slot]);
    }
    assert_eq!(list.remaining_capacity(), 0);
}

#[rstest]
fn read_stops_at_append_cursor() {
    let mut list = DocumentWordList::new(4, 3).unwrap();
    list.append(&[1]).unwrap();
    list.append(&[2, 2]).unwrap();

    let slots: Vec<usize> = (&list).into_iter().map(|(slot, _)| slot).collect();
    assert_eq!(slots, vec![0, 1]);
    assert_eq!(list.lengths(), &[1, 2, 0, 0]);
}

#[rstest]
fn explicit_delete_consumes_the_list() {
    let list = DocumentWordList::new(2, 2).unwrap();
    list.delete();
}

// =============================================================================
// Presentation
// =============================================================================

#[rstest]
fn dump_lists_every_slot() {
    let mut list = DocumentWordList::new(3, 5).unwrap();
    list.append(&[3, 7, 3, 9]).unwrap();
    list.append(&[1, 12]).unwrap();

    assert_eq!(
        list.dump(),
        "> Data <\n 1: {  3,  7,  3,  9 }\n 2: {  1, 12 }\n 3: {  }\n"
    );
}

#[rstest]
fn attributes_are_aligned_to_widest_number() {
    let list = DocumentWordList::new(2, 150).unwrap();
    assert_eq!(
        list.attributes().to_string(),
        "> Attributes <\nIntersection data: NO\nNumber of arrays:    2\nMax. array length: 150\n"
    );
}

#[rstest]
fn dump_with_attributes_marks_intersection_results() {
    let mut list = DocumentWordList::new(1, 3).unwrap();
    list.append(&[5, 6]).unwrap();
    let result = list.intersect_with(&[6], IntersectionMode::Defaults).unwrap();

    assert_eq!(
        result.dump_with_attributes(),
        "> Data <\n 1: {  6 }\n> Attributes <\nIntersection data: YES\nNumber of arrays:  1\nMax. array length: 3\n"
    );
}

// =============================================================================
// Intersection preconditions
// =============================================================================

#[rstest]
#[case(IntersectionApproach::TwoNestedLoops)]
#[case(IntersectionApproach::QSortAndBinarySearch)]
#[case(IntersectionApproach::HeapSortAndBinarySearch)]
fn query_longer_than_document_capacity_is_rejected(#[case] approach: IntersectionApproach) {
    let mut list = DocumentWordList::new(1, 2).unwrap();
    list.append(&[1, 2]).unwrap();

    let err = IntersectionEngine::default()
        .intersect(&list, &[1, 2, 3], approach, IntersectionMode::Defaults)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::CapacityExceeded { value: 3, limit: 2 });
}

#[rstest]
#[case(IntersectionApproach::TwoNestedLoops)]
#[case(IntersectionApproach::QSortAndBinarySearch)]
#[case(IntersectionApproach::HeapSortAndBinarySearch)]
fn empty_query_is_rejected(#[case] approach: IntersectionApproach) {
    let mut list = DocumentWordList::new(1, 2).unwrap();
    list.append(&[1, 2]).unwrap();

    let err = IntersectionEngine::default()
        .intersect(&list, &[], approach, IntersectionMode::Defaults)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidArgument);
}

#[rstest]
#[case(IntersectionApproach::TwoNestedLoops)]
#[case(IntersectionApproach::QSortAndBinarySearch)]
#[case(IntersectionApproach::HeapSortAndBinarySearch)]
fn input_list_is_not_modified(#[case] approach: IntersectionApproach) {
    let mut list = DocumentWordList::new(2, 4).unwrap();
    list.append(&[4, 3, 2, 1]).unwrap();
    let before = list.clone();

    let result = IntersectionEngine::default()
        .intersect(&list, &[1, 4], approach, IntersectionMode::Defaults)
        .unwrap();

    assert_eq!(list, before);
    assert_eq!(result.get(0), Some(&[4, 1][..]));
    assert_eq!(result.len(), 1);
    assert_eq!(result.capacity_documents(), 2);
}
