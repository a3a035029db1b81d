//! Region-locality properties of deck edits.

use proptest::prelude::*;

use strata_core::GridExtent;
use strata_engine::{KeywordProcessor, ProcessorConfig, PropertyStore};
use strata_test_utils::{cells, parse};

const DIMS: (usize, usize, usize) = (4, 3, 2);

fn bounds_strategy() -> impl Strategy<Value = [usize; 6]> {
    (0..DIMS.0, 0..DIMS.0, 0..DIMS.1, 0..DIMS.1, 0..DIMS.2, 0..DIMS.2).prop_map(
        |(a, b, c, d, e, f)| [a.min(b), a.max(b), c.min(d), c.max(d), e.min(f), e.max(f)],
    )
}

fn one_based(b: [usize; 6]) -> String {
    b.iter()
        .map(|v| (v + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn inside(b: &[usize; 6], (i, j, k): (usize, usize, usize)) -> bool {
    (b[0]..=b[1]).contains(&i) && (b[2]..=b[3]).contains(&j) && (b[4]..=b[5]).contains(&k)
}

fn process(src: &str) -> PropertyStore {
    let deck = parse(src);
    let extent = GridExtent::new(DIMS.0, DIMS.1, DIMS.2).unwrap();
    let mut store = PropertyStore::with_standard_properties(extent);
    KeywordProcessor::new(&mut store, ProcessorConfig::default())
        .unwrap()
        .process_deck(&deck)
        .unwrap();
    store
}

proptest! {
    #[test]
    fn active_box_edit_touches_only_its_cells(b in bounds_strategy(), v in 2i32..50) {
        let src = format!("BOX\n {} /\nEQUALS\n SATNUM {v} /\n/\nENDBOX\n", one_based(b));
        let store = process(&src);
        let satnum = store.int_field("SATNUM").unwrap();
        for cell in cells(store.extent()) {
            let expected = if inside(&b, cell) { v } else { 1 };
            prop_assert_eq!(satnum.get(cell.0, cell.1, cell.2).unwrap(), expected);
        }
    }

    #[test]
    fn record_box_matches_active_box(b in bounds_strategy(), f in 0.5f64..4.0) {
        let via_box = process(&format!(
            "EQUALS\n PERMX 10 /\n/\nBOX\n {} /\nMULTIPLY\n PERMX {f} /\n/\n",
            one_based(b)
        ));
        let via_record = process(&format!(
            "EQUALS\n PERMX 10 /\n/\nMULTIPLY\n PERMX {f} {} /\n/\n",
            one_based(b)
        ));
        prop_assert_eq!(via_box.double_field("PERMX"), via_record.double_field("PERMX"));
    }

    #[test]
    fn data_keyword_fills_box_in_order(b in bounds_strategy()) {
        let n = (b[1] - b[0] + 1) * (b[3] - b[2] + 1) * (b[5] - b[4] + 1);
        let values: Vec<String> = (0..n).map(|v| (v + 10).to_string()).collect();
        let store = process(&format!(
            "BOX\n {} /\nFIPNUM\n {} /\nENDBOX\n",
            one_based(b),
            values.join(" ")
        ));
        let fipnum = store.int_field("FIPNUM").unwrap();
        let mut next = 10;
        for cell in cells(store.extent()) {
            let got = fipnum.get(cell.0, cell.1, cell.2).unwrap();
            if inside(&b, cell) {
                prop_assert_eq!(got, next);
                next += 1;
            } else {
                prop_assert_eq!(got, 1);
            }
        }
    }
}
