use super::*;
use crate::dims::defs::Dimension;
use std::collections::HashSet;

fn dim(key: &str, column: &str, values: &[&str]) -> Dimension {
    Dimension {
        key: key.to_string(),
        column: column.to_string(),
        values: values.iter().map(|v| v.to_string()).collect(),
    }
}

fn set() -> DimensionSet {
    DimensionSet {
        dimensions: vec![
            dim("rcp", "RCP", &["rcp45", "rcp85"]),
            dim("dmg", "run", &["bhm_sr", "bhm_lr", "djo"]),
            dim("ssp", "SSP", &["SSP1", "SSP2", "SSP3", "SSP4"]),
        ],
    }
}

#[test]
fn yields_full_product_once_each() {
    let set = set();
    let combos: Vec<Combination> = Combinations::new(&set).collect();
    assert_eq!(combos.len(), 2 * 3 * 4);

    let ids: HashSet<&str> = combos.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), combos.len());
    let predicates: HashSet<&Predicate> = combos.iter().map(|c| &c.predicate).collect();
    assert_eq!(predicates.len(), combos.len());
}

#[test]
fn first_and_last_combination() {
    let set = set();
    let combos: Vec<Combination> = Combinations::new(&set).collect();

    assert_eq!(combos[0].id, "rcp_rcp45_dmg_bhm_sr_ssp_SSP1");
    assert_eq!(
        combos[0].predicate.terms(),
        [
            ("RCP".to_string(), "rcp45".to_string()),
            ("run".to_string(), "bhm_sr".to_string()),
            ("SSP".to_string(), "SSP1".to_string()),
        ]
    );
    assert_eq!(combos[1].id, "rcp_rcp45_dmg_bhm_sr_ssp_SSP2");
    assert_eq!(combos[23].id, "rcp_rcp85_dmg_djo_ssp_SSP4");
}

#[test]
fn exact_size_and_rederivable() {
    let set = set();
    let mut combos = Combinations::new(&set);
    assert_eq!(combos.len(), 24);
    combos.next();
    combos.next();
    assert_eq!(combos.len(), 22);

    let again: Vec<Combination> = Combinations::new(&set).collect();
    let first: Vec<Combination> = Combinations::new(&set).collect();
    assert_eq!(again, first);
}

#[test]
fn empty_dimension_yields_nothing() {
    let set = DimensionSet {
        dimensions: vec![dim("rcp", "RCP", &["rcp45"]), dim("ssp", "SSP", &[])],
    };
    assert_eq!(Combinations::new(&set).count(), 0);
}

#[test]
fn single_dimension() {
    let set = DimensionSet {
        dimensions: vec![dim("ssp", "SSP", &["SSP1", "SSP2"])],
    };
    let ids: Vec<String> = Combinations::new(&set).map(|c| c.id).collect();
    assert_eq!(ids, ["ssp_SSP1", "ssp_SSP2"]);
}
