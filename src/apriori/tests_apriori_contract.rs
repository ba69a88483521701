// =========================================================================
// FALSIFY-AP: Apriori level-wise search contract (minar)
//
// Each test tries to falsify one observable property of the miner:
// support bounds, antimonotone support, threshold admission, determinism,
// singleton completeness, termination, downward closure of the output,
// and the permissive flatten-and-recombine candidate policy.
//
// References:
//   - Agrawal & Srikant (1994) "Fast Algorithms for Mining Association
//     Rules", VLDB
// =========================================================================

use super::*;

fn grocery_store() -> TransactionSet<&'static str> {
    TransactionSet::new(vec![
        vec!["A", "B"],
        vec!["B", "C"],
        vec!["A", "B", "C"],
        vec!["C", "D"],
    ])
    .expect("contract data is non-empty")
}

fn mine(store: &TransactionSet<&'static str>, min_support: f64) -> Vec<SupportRecord<&'static str>> {
    let mut miner = Apriori::new().with_min_support(min_support);
    miner.fit(store).expect("contract thresholds are valid");
    miner.frequent_itemsets().to_vec()
}

/// FALSIFY-AP-001: Support bounds — every support lies in [0, 1]
#[test]
fn falsify_ap_001_support_bounds() {
    let store = grocery_store();
    for itemset in [
        Itemset::new(["A"]),
        Itemset::new(["A", "B", "C", "D"]),
        Itemset::new(["Z"]),
        Itemset::<&str>::new([]),
    ] {
        let support = store.calc_support(&itemset);
        assert!(
            (0.0..=1.0).contains(&support),
            "FALSIFIED AP-001: support({itemset}) = {support} outside [0, 1]"
        );
    }
    for record in mine(&store, 0.0) {
        assert!(
            (0.0..=1.0).contains(&record.support),
            "FALSIFIED AP-001: recorded support {} outside [0, 1]",
            record.support
        );
    }
}

/// FALSIFY-AP-002: Antimonotone support — a superset never has more support
#[test]
fn falsify_ap_002_antimonotone_support() {
    let store = grocery_store();
    let records = mine(&store, 0.0);
    for a in &records {
        for b in &records {
            if a.items.is_subset(&b.items) {
                assert!(
                    b.support <= a.support,
                    "FALSIFIED AP-002: {} has support {} > {} of its subset {}",
                    b.items,
                    b.support,
                    a.support,
                    a.items
                );
            }
        }
    }
}

/// FALSIFY-AP-003: Threshold admission — no record below min_support
#[test]
fn falsify_ap_003_threshold_respected() {
    let store = grocery_store();
    for min_support in [0.25, 0.5, 0.75, 1.0] {
        for record in mine(&store, min_support) {
            assert!(
                record.support >= min_support,
                "FALSIFIED AP-003: {} admitted at support {} < threshold {}",
                record.items,
                record.support,
                min_support
            );
        }
    }
}

/// FALSIFY-AP-004: Determinism — identical input yields identical output
#[test]
fn falsify_ap_004_deterministic_sequence() {
    let first = mine(&grocery_store(), 0.5);
    let second = mine(&grocery_store(), 0.5);
    assert_eq!(
        first, second,
        "FALSIFIED AP-004: two runs over identical input disagreed"
    );
}

/// FALSIFY-AP-005: Singleton completeness — every item at threshold appears
#[test]
fn falsify_ap_005_singleton_completeness() {
    let transactions = vec![
        vec!["A", "B"],
        vec!["B", "C"],
        vec!["A", "B", "C"],
        vec!["C", "D"],
    ];
    let store = TransactionSet::new(transactions.clone()).expect("contract data is non-empty");
    let min_support = 0.5;
    let records = mine(&store, min_support);

    for item in store.distinct_items() {
        let count = transactions
            .iter()
            .filter(|transaction| transaction.contains(&item))
            .count();
        let support = count as f64 / transactions.len() as f64;
        if support >= min_support {
            assert!(
                records
                    .iter()
                    .any(|record| record.items == Itemset::singleton(item)),
                "FALSIFIED AP-005: frequent item {item} missing from size-1 records"
            );
        }
    }
}

/// FALSIFY-AP-006: Termination — a zero threshold still exhausts finitely
#[test]
fn falsify_ap_006_terminates_at_zero_threshold() {
    let store = TransactionSet::new(vec![
        vec![1, 2, 3],
        vec![2, 3, 4],
        vec![1, 4],
    ])
    .expect("contract data is non-empty");
    let mut miner = Apriori::new().with_min_support(0.0);
    miner.fit(&store).expect("zero is a valid threshold");

    // Four distinct items: the run must stop after 2^4 - 1 itemsets.
    assert_eq!(
        miner.frequent_itemsets().len(),
        15,
        "FALSIFIED AP-006: zero-threshold run did not cover exactly the power set"
    );
}

/// FALSIFY-AP-007: Worked example — exact records in exact discovery order
#[test]
fn falsify_ap_007_worked_example() {
    let records = mine(&grocery_store(), 0.5);
    let expected = vec![
        SupportRecord::new(Itemset::new(["A"]), 0.5),
        SupportRecord::new(Itemset::new(["B"]), 0.75),
        SupportRecord::new(Itemset::new(["C"]), 0.75),
        SupportRecord::new(Itemset::new(["A", "B"]), 0.5),
        SupportRecord::new(Itemset::new(["B", "C"]), 0.5),
    ];
    assert_eq!(
        records, expected,
        "FALSIFIED AP-007: worked example diverged from the reference sequence"
    );
}

/// FALSIFY-AP-008: No over-pruning — zero threshold reaches every combination
#[test]
fn falsify_ap_008_zero_threshold_reaches_every_combination() {
    let store = grocery_store();
    let records = mine(&store, 0.0);
    // Universe {A, B, C, D}: every one of the 15 non-empty subsets shows up.
    assert_eq!(
        records.len(),
        15,
        "FALSIFIED AP-008: expected all 15 non-empty subsets, got {}",
        records.len()
    );
    let triple = Itemset::new(["A", "B", "C"]);
    assert!(
        records.iter().any(|record| record.items == triple),
        "FALSIFIED AP-008: {triple} missing despite zero threshold"
    );
}

/// FALSIFY-AP-009: Fail-fast errors — bad input reported before any work
#[test]
fn falsify_ap_009_fail_fast_errors() {
    let no_transactions: Vec<Vec<u8>> = Vec::new();
    assert_eq!(
        TransactionSet::new(no_transactions).unwrap_err(),
        MinarError::EmptyTransactionSet,
        "FALSIFIED AP-009: empty transaction collection was accepted"
    );

    for bad in [-0.1, 1.1] {
        let mut miner = Apriori::new().with_min_support(bad);
        let result = miner.fit(&grocery_store());
        assert!(
            matches!(
                result,
                Err(MinarError::InvalidHyperparameter { ref param, .. }) if param == "min_support"
            ),
            "FALSIFIED AP-009: min_support = {bad} was accepted"
        );
        assert!(
            miner.frequent_itemsets().is_empty(),
            "FALSIFIED AP-009: partial results left behind after rejected fit"
        );
    }
}

/// FALSIFY-AP-010: Permissive candidate policy — flatten, don't subset-prune
#[test]
fn falsify_ap_010_candidates_flatten_not_join() {
    // {A, C} never survived anywhere, yet {A, B, C} must still be emitted
    // because the flattened survivor universe is {A, B, C}.
    let survivors = vec![Itemset::new(["A", "B"]), Itemset::new(["B", "C"])];
    let next = generate_candidates(&survivors, 3);
    assert_eq!(
        next,
        vec![Itemset::new(["A", "B", "C"])],
        "FALSIFIED AP-010: candidate generation no longer flattens survivors"
    );
}

/// FALSIFY-AP-011: Downward closure — every subset of a record is a record
#[test]
fn falsify_ap_011_downward_closure_of_output() {
    let records = mine(&grocery_store(), 0.5);
    for record in &records {
        if record.items.len() < 2 {
            continue;
        }
        for item in record.items.iter() {
            let subset: Itemset<&str> = record
                .items
                .iter()
                .filter(|member| *member != item)
                .copied()
                .collect();
            assert!(
                records.iter().any(|other| other.items == subset),
                "FALSIFIED AP-011: {} is frequent but its subset {} is absent",
                record.items,
                subset
            );
        }
    }
}
