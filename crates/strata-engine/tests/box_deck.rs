//! End-to-end processing of the reference box decks.

use strata_core::EditError;
use strata_engine::{
    load_properties, EngineError, KeywordProcessor, ProcessorConfig, PropertyStore,
};
use strata_test_utils::{cells, close, decks, parse, run_deck, standard_store};

fn box_store() -> PropertyStore {
    let (store, outcome) = run_deck(decks::BOX_DECK);
    outcome.unwrap();
    store
}

fn in_corner(i: usize, j: usize, k: usize) -> bool {
    i <= 1 && j <= 1 && k <= 1
}

#[test]
fn permeability_copies_are_scaled() {
    let store = box_store();
    let permx = store.double_field("PERMX").unwrap();
    let permy = store.double_field("PERMY").unwrap();
    let permz = store.double_field("PERMZ").unwrap();
    for (i, j, k) in cells(store.extent()) {
        let x = permx.get(i, j, k).unwrap();
        assert_eq!(x, 10.0 * (k as f64 + 1.0));
        assert!(close(x * 0.25, permz.get(i, j, k).unwrap(), 0.001));
        assert_eq!(x * 2.0, permy.get(i, j, k).unwrap());
    }
}

#[test]
fn box_restricts_satnum() {
    let store = box_store();
    let satnum = store.int_field("SATNUM").unwrap();
    let extent = store.extent();
    for (i, j, k) in cells(extent) {
        let g = i + j * extent.nx() + k * extent.nx() * extent.ny();
        let expected = if in_corner(i, j, k) { 10 } else { 2 };
        assert_eq!(satnum.get_flat(g).unwrap(), expected, "cell ({i},{j},{k})");
    }
}

#[test]
fn multiply_after_copy_stacks_in_record_box() {
    let store = box_store();
    let satnum = store.int_field("SATNUM").unwrap();
    let fipnum = store.int_field("FIPNUM").unwrap();
    for (i, j, k) in cells(store.extent()) {
        let factor = if in_corner(i, j, k) { 4 } else { 2 };
        assert_eq!(
            factor * satnum.get(i, j, k).unwrap(),
            fipnum.get(i, j, k).unwrap()
        );
    }
}

#[test]
fn equals_and_add_by_layer() {
    let store = box_store();
    let pvtnum = store.int_field("PVTNUM").unwrap();
    let eqlnum = store.int_field("EQLNUM").unwrap();
    let poro = store.double_field("PORO").unwrap();
    for (i, j, k) in cells(store.extent()) {
        let layer = k as i32;
        assert_eq!(pvtnum.get(i, j, k).unwrap(), layer);
        assert_eq!(eqlnum.get(i, j, k).unwrap(), 77 + 2 * layer);
        assert_eq!(poro.get(i, j, k).unwrap(), 0.25);
    }
}

#[test]
fn operate_functions() {
    let store = box_store();
    let ntg = store.double_field("NTG").unwrap();
    assert_eq!(ntg.get(0, 0, 0).unwrap(), 8.5);
    assert_eq!(ntg.get(0, 5, 0).unwrap(), 5.0);
    assert_eq!(ntg.get(0, 0, 1).unwrap(), 4.0);
    assert_eq!(ntg.get(0, 5, 1).unwrap(), 4.0);
    assert_eq!(ntg.get(0, 0, 2).unwrap(), 2.0);

    let touched = [(0, 0, 0), (0, 5, 0), (0, 0, 1), (0, 5, 1), (0, 0, 2)];
    for cell in cells(store.extent()).filter(|c| !touched.contains(c)) {
        let (i, j, k) = cell;
        assert_eq!(ntg.get(i, j, k).unwrap(), 1.0, "cell {cell:?}");
    }
}

#[test]
fn operate_sees_values_from_preceding_equals() {
    let deck = parse(decks::BOX_DECK);
    let mut store = standard_store(&deck);
    let mut processor = KeywordProcessor::new(&mut store, ProcessorConfig::default()).unwrap();
    let ntg = |p: &KeywordProcessor<'_>, j: usize| {
        p.store().double_field("NTG").unwrap().get(0, j, 0).unwrap()
    };

    let keywords = deck.keywords();
    let equals = keywords
        .iter()
        .position(|kw| {
            kw.name() == "EQUALS"
                && kw.records()[0].item(0).and_then(|item| item.as_str()) == Some("NTG")
        })
        .unwrap();
    assert_eq!(keywords[equals + 1].name(), "OPERATE");

    for keyword in &keywords[..=equals] {
        processor.process_keyword(keyword).unwrap();
    }
    assert_eq!(ntg(&processor, 0), 3.0);
    assert_eq!(ntg(&processor, 5), 1.0);

    processor.process_keyword(&keywords[equals + 1]).unwrap();
    assert_eq!(ntg(&processor, 0), 8.5);
    assert_eq!(ntg(&processor, 5), 5.0);
}

#[test]
fn data_keyword_larger_than_box_fails() {
    let (store, outcome) = run_deck(decks::BOX_TOO_SMALL_DECK);
    let err = outcome.unwrap_err();
    assert_eq!(err.keyword, "PERMX");
    assert_eq!(
        err.kind,
        EditError::DataSizeMismatch {
            expected: 27,
            found: 30
        }
    );
    let permx = store.double_field("PERMX").unwrap();
    assert!(permx.values().iter().all(|&v| v == 1.0));
}

#[test]
fn out_of_extent_box_fails_without_mutation() {
    let (store, outcome) = run_deck(decks::BOX_OUT_OF_EXTENT_DECK);
    let err = outcome.unwrap_err();
    assert_eq!(err.keyword, "BOX");
    assert!(matches!(err.kind, EditError::InvalidRegion { .. }));
    let poro = store.double_field("PORO").unwrap();
    assert!(poro.values().iter().all(|&v| v == 0.2));
}

#[test]
fn load_properties_reports_each_layer() {
    let err = load_properties("GRID\n", ProcessorConfig::default()).unwrap_err();
    assert!(matches!(err, EngineError::Deck(_)));

    let err = load_properties(decks::BOX_TOO_SMALL_DECK, ProcessorConfig::default()).unwrap_err();
    assert!(matches!(err, EngineError::Process(_)));

    let config = ProcessorConfig {
        section_keywords: vec!["COPY".into()],
        ..Default::default()
    };
    let err = load_properties(decks::BOX_DECK, config).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));

    let store = load_properties(decks::BOX_DECK, ProcessorConfig::default()).unwrap();
    assert_eq!(store, box_store());
}
