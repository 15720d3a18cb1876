use rstest::rstest;
use limpet_core::common_tests::indexed_collection_tests::*;
use limpet_core::data_structures::{BlockingList, DynamicArray, LinkedList};
use limpet_core::IndexedCollection;

// Trait for type-level parametrization
trait TestIndexedCollection {
    type CollectionType: IndexedCollection<i32> + Default;
    type KeyedCollectionType: IndexedCollection<Keyed> + Default;
}

// Marker types for each collection
struct UseDynamicArray;
struct UseLinkedList;
struct UseBlockingList;

impl TestIndexedCollection for UseDynamicArray {
    type CollectionType = DynamicArray<i32>;
    type KeyedCollectionType = DynamicArray<Keyed>;
}

impl TestIndexedCollection for UseLinkedList {
    type CollectionType = LinkedList<i32>;
    type KeyedCollectionType = LinkedList<Keyed>;
}

impl TestIndexedCollection for UseBlockingList {
    type CollectionType = BlockingList<i32>;
    type KeyedCollectionType = BlockingList<Keyed>;
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn append_then_get<T: TestIndexedCollection>(#[case] _type: T) {
    test_append_then_get::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn to_vec_matches_insertion_order<T: TestIndexedCollection>(#[case] _type: T) {
    test_to_vec_matches_insertion_order::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn rejects_absent_values<T: TestIndexedCollection>(#[case] _type: T) {
    test_rejects_absent_values::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn index_errors_on_empty_and_full<T: TestIndexedCollection>(#[case] _type: T) {
    test_index_errors_on_empty_and_full::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn insert_at_len_is_refused<T: TestIndexedCollection>(#[case] _type: T) {
    test_insert_at_len_is_refused::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn insert_front_and_remove_restores<T: TestIndexedCollection>(#[case] _type: T) {
    test_insert_front_and_remove_restores::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn insert_middle_splices_before<T: TestIndexedCollection>(#[case] _type: T) {
    test_insert_middle_splices_before::<T::CollectionType>();
}

// The last valid index is a boundary the implementations treat
// differently: the list family appends after the tail, the array
// splices like any interior index.

#[rstest]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn insert_at_last_index_appends<T: TestIndexedCollection>(#[case] _type: T) {
    test_insert_at_last_index_appends::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
fn insert_at_last_index_splices_before<T: TestIndexedCollection>(#[case] _type: T) {
    test_insert_at_last_index_splices_before::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn set_overwrites_in_place<T: TestIndexedCollection>(#[case] _type: T) {
    test_set_overwrites_in_place::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn remove_value_takes_first_match<T: TestIndexedCollection>(#[case] _type: T) {
    test_remove_value_takes_first_match::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn index_of_and_last_index_of<T: TestIndexedCollection>(#[case] _type: T) {
    test_index_of_and_last_index_of::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn contains<T: TestIndexedCollection>(#[case] _type: T) {
    test_contains::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn predicate_search_in_range<T: TestIndexedCollection>(#[case] _type: T) {
    test_predicate_search_in_range::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn remove_if_range<T: TestIndexedCollection>(#[case] _type: T) {
    test_remove_if_range::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn remove_all_duplicates<T: TestIndexedCollection>(#[case] _type: T) {
    test_remove_all_duplicates::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn sort_descending<T: TestIndexedCollection>(#[case] _type: T) {
    test_sort_descending::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn sort_ascending<T: TestIndexedCollection>(#[case] _type: T) {
    test_sort_ascending::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn sort_is_stable_on_ties<T: TestIndexedCollection>(#[case] _type: T) {
    test_sort_is_stable_on_ties::<T::KeyedCollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn add_all_appends_in_order<T: TestIndexedCollection>(#[case] _type: T) {
    test_add_all_appends_in_order::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn add_all_at_start<T: TestIndexedCollection>(#[case] _type: T) {
    test_add_all_at_start::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn add_all_at_middle<T: TestIndexedCollection>(#[case] _type: T) {
    test_add_all_at_middle::<T::CollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn clear_then_reuse<T: TestIndexedCollection>(#[case] _type: T) {
    test_clear_then_reuse::<T::CollectionType>();
}

// Predicate searches report their position differently: the list
// family recomputes the index by equality on the matched value, the
// array reports the match position directly.

#[rstest]
#[case::linked_list(UseLinkedList)]
#[case::blocking_list(UseBlockingList)]
fn predicate_index_recomputed_through_equality<T: TestIndexedCollection>(#[case] _type: T) {
    test_predicate_index_recomputed_through_equality::<T::KeyedCollectionType>();
}

#[rstest]
#[case::dynamic_array(UseDynamicArray)]
fn predicate_index_reported_directly<T: TestIndexedCollection>(#[case] _type: T) {
    test_predicate_index_reported_directly::<T::KeyedCollectionType>();
}
