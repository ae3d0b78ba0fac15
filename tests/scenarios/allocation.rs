//! Scenario: Two projects share one hardware set
//!
//! Journey: a set of 20 units, one project already holding 6.
//!
//! Steps:
//! 1. The second project takes everything that is left
//! 2. The first project asks for one more and gets nothing
//! 3. Returns are floored at zero
//!
//! Success Criteria:
//! - Availability always equals capacity minus what is checked out
//! - Over-asks are clamped, never rejected

use hwmgr::{CheckoutOutcome, HardwareSet, HardwareSetId, Ledger, Project, ProjectId};

fn ids() -> (ProjectId, ProjectId, HardwareSetId) {
    (ProjectId::from("p1"), ProjectId::from("p2"), HardwareSetId::from("hs1"))
}

fn shared_set_ledger() -> Ledger {
    Ledger::new(
        vec![HardwareSet::new("hs1", "HW Set A", 20)],
        vec![
            Project::new("p1", "Autonomous Cart")
                .with_membership(true)
                .with_qty("hs1", 6),
            Project::new("p2", "Smart Greenhouse").with_membership(true),
        ],
    )
}

/// SCENARIO: second project drains the set, first project is clamped
#[test]
fn scenario_shared_set_is_drained_then_clamped() {
    let (p1, p2, hs1) = ids();
    let ledger = shared_set_ledger();
    assert_eq!(ledger.availability().available(&hs1), 14);

    // Step 1: p2 takes the remaining 14
    let (ledger, outcome) = ledger.adjust_checkout_with_outcome(&p2, &hs1, 14);
    assert_eq!(outcome, CheckoutOutcome::Applied { delta: 14 });
    assert_eq!(ledger.project(&p2).unwrap().qty(&hs1), 14);
    assert_eq!(ledger.availability().available(&hs1), 0);

    // Step 2: p1 asks for one more
    let (ledger, outcome) = ledger.adjust_checkout_with_outcome(&p1, &hs1, 1);
    assert_eq!(
        outcome,
        CheckoutOutcome::Clamped {
            requested: 1,
            applied: 0
        }
    );
    assert_eq!(ledger.project(&p1).unwrap().qty(&hs1), 6);
    assert_eq!(ledger.availability().available(&hs1), 0);

    // Step 3: p1 returns more than it holds
    let ledger = ledger.adjust_checkout(&p1, &hs1, -100);
    assert_eq!(ledger.project(&p1).unwrap().qty(&hs1), 0);
    assert_eq!(ledger.availability().available(&hs1), 6);
}

/// SCENARIO: an increase larger than what is free gets exactly what is free
#[test]
fn scenario_increase_clamps_to_availability() {
    let (p1, p2, hs1) = ids();
    let ledger = shared_set_ledger().adjust_checkout(&p2, &hs1, 12);
    assert_eq!(ledger.availability().available(&hs1), 2);

    let (ledger, outcome) = ledger.adjust_checkout_with_outcome(&p1, &hs1, 5);

    assert_eq!(
        outcome,
        CheckoutOutcome::Clamped {
            requested: 5,
            applied: 2
        }
    );
    assert_eq!(ledger.project(&p1).unwrap().qty(&hs1), 8);
    assert_eq!(ledger.availability().available(&hs1), 0);
}

/// SCENARIO: a decrease larger than what is held floors at zero
#[test]
fn scenario_decrease_floors_at_zero() {
    let (_, p2, hs1) = ids();
    let ledger = shared_set_ledger().adjust_checkout(&p2, &hs1, 3);

    let (ledger, outcome) = ledger.adjust_checkout_with_outcome(&p2, &hs1, -10);

    assert_eq!(
        outcome,
        CheckoutOutcome::Clamped {
            requested: -10,
            applied: -3
        }
    );
    assert_eq!(ledger.project(&p2).unwrap().qty(&hs1), 0);
    assert_eq!(ledger.availability().available(&hs1), 14);
}

/// SCENARIO: the silent variant and the reporting variant agree
#[test]
fn scenario_reporting_variant_matches_silent_variant() {
    let (p1, _, hs1) = ids();

    for delta in [-7, -1, 0, 1, 14, 15, 1000] {
        let silent = shared_set_ledger().adjust_checkout(&p1, &hs1, delta);
        let (reported, _) = shared_set_ledger().adjust_checkout_with_outcome(&p1, &hs1, delta);
        assert_eq!(silent, reported, "delta {delta}");
    }
}
