//! Property tests for the allocation ledger.

use proptest::prelude::*;

use hwmgr::domain::services::checked_out;
use hwmgr::{CheckoutOutcome, HardwareSet, HardwareSetId, Ledger, Project, ProjectId};

/// Operation applied to a generated ledger. Indices past the end address
/// ids that do not exist.
#[derive(Debug, Clone)]
enum Op {
    Toggle(usize),
    Adjust(usize, usize, i64),
}

/// Build a ledger whose seed respects capacity: each allocation is cut to
/// what is still free in its set.
fn build_ledger(capacities: &[u32], members: &[bool], raw_qty: &[Vec<u32>]) -> Ledger {
    let sets: Vec<HardwareSet> = capacities
        .iter()
        .enumerate()
        .map(|(i, cap)| HardwareSet::new(format!("hs{i}"), format!("Set {i}"), *cap))
        .collect();

    let mut remaining: Vec<u32> = capacities.to_vec();
    let projects = members
        .iter()
        .enumerate()
        .map(|(p, is_member)| {
            let mut project = Project::new(format!("p{p}"), format!("Project {p}"))
                .with_membership(*is_member);
            for (s, free) in remaining.iter_mut().enumerate() {
                let want = raw_qty
                    .get(p)
                    .and_then(|row| row.get(s))
                    .copied()
                    .unwrap_or(0);
                let qty = want.min(*free);
                *free -= qty;
                if qty > 0 {
                    project = project.with_qty(format!("hs{s}"), qty);
                }
            }
            project
        })
        .collect();

    Ledger::new(sets, projects)
}

fn set_id(i: usize) -> HardwareSetId {
    HardwareSetId::from(format!("hs{i}"))
}

fn project_id(i: usize) -> ProjectId {
    ProjectId::from(format!("p{i}"))
}

fn ledger_strategy() -> impl Strategy<Value = Ledger> {
    (
        prop::collection::vec(0u32..=30, 1..=4),
        prop::collection::vec(any::<bool>(), 1..=4),
        prop::collection::vec(prop::collection::vec(0u32..=20, 0..=4), 0..=4),
    )
        .prop_map(|(caps, members, qty)| build_ledger(&caps, &members, &qty))
}

fn delta_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        8 => -40i64..=40,
        1 => Just(i64::MAX),
        1 => Just(i64::MIN),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..6).prop_map(Op::Toggle),
        (0usize..6, 0usize..6, delta_strategy()).prop_map(|(p, s, d)| Op::Adjust(p, s, d)),
    ]
}

fn apply(ledger: Ledger, op: &Op) -> Ledger {
    match op {
        Op::Toggle(p) => ledger.toggle_membership(&project_id(*p)),
        Op::Adjust(p, s, d) => ledger.adjust_checkout(&project_id(*p), &set_id(*s), *d),
    }
}

fn assert_invariants(ledger: &Ledger) -> Result<(), TestCaseError> {
    let availability = ledger.availability();
    for set in ledger.hardware_sets() {
        let out = checked_out(ledger.projects(), set.id());
        prop_assert!(
            out <= u64::from(set.capacity()),
            "{} has {} out of {}",
            set.id(),
            out,
            set.capacity()
        );
        prop_assert_eq!(
            u64::from(availability.available(set.id())),
            u64::from(set.capacity()) - out
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: no sequence of operations pushes a set over capacity, and
    /// availability always equals capacity minus what is checked out.
    #[test]
    fn property_capacity_and_availability_hold(
        ledger in ledger_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        assert_invariants(&ledger)?;

        let mut ledger = ledger;
        for op in &ops {
            ledger = apply(ledger, op);
            assert_invariants(&ledger)?;
        }
    }

    /// PROPERTY: an applied delta is exactly the clamped request.
    #[test]
    fn property_adjust_applies_clamped_delta(
        ledger in ledger_strategy(),
        p in 0usize..4,
        s in 0usize..4,
        delta in delta_strategy(),
    ) {
        let (pid, sid) = (project_id(p), set_id(s));
        prop_assume!(ledger.project(&pid).is_some());

        let before = ledger.project(&pid).map(|x| x.qty(&sid)).unwrap_or(0);
        let available = ledger.availability().available(&sid);

        let (next, outcome) = ledger.clone().adjust_checkout_with_outcome(&pid, &sid, delta);
        let after = next.project(&pid).map(|x| x.qty(&sid)).unwrap_or(0);

        let expected = if delta >= 0 {
            i64::from(before) + delta.min(i64::from(available))
        } else {
            (i64::from(before) + delta.max(-i64::from(before))).max(0)
        };
        prop_assert_eq!(i64::from(after), expected);
        prop_assert_eq!(outcome.applied(), i64::from(after) - i64::from(before));

        match outcome {
            CheckoutOutcome::Applied { delta: applied } => prop_assert_eq!(applied, delta),
            CheckoutOutcome::Clamped { requested, .. } => prop_assert_eq!(requested, delta),
            CheckoutOutcome::Unchanged => prop_assert_eq!(delta, 0),
        }
    }

    /// PROPERTY: toggling membership touches only that project's flag.
    #[test]
    fn property_toggle_only_flips_membership(
        ledger in ledger_strategy(),
        p in 0usize..4,
    ) {
        let pid = project_id(p);
        let next = ledger.clone().toggle_membership(&pid);

        prop_assert_eq!(next.hardware_sets(), ledger.hardware_sets());
        prop_assert_eq!(next.projects().len(), ledger.projects().len());
        for (old, new) in ledger.projects().iter().zip(next.projects()) {
            prop_assert_eq!(old.hardware(), new.hardware());
            if old.id() == &pid {
                prop_assert_eq!(new.is_member(), !old.is_member());
            } else {
                prop_assert_eq!(new, old);
            }
        }
        prop_assert_eq!(next.toggle_membership(&pid), ledger);
    }

    /// PROPERTY: a zero delta never changes anything.
    #[test]
    fn property_zero_delta_is_noop(
        ledger in ledger_strategy(),
        p in 0usize..6,
        s in 0usize..6,
    ) {
        let (next, outcome) = ledger
            .clone()
            .adjust_checkout_with_outcome(&project_id(p), &set_id(s), 0);

        prop_assert_eq!(next, ledger);
        prop_assert_eq!(outcome, CheckoutOutcome::Unchanged);
    }

    /// PROPERTY: unknown ids leave the ledger value-equal.
    #[test]
    fn property_unknown_ids_are_noops(
        ledger in ledger_strategy(),
        s in 0usize..4,
        delta in delta_strategy(),
    ) {
        let ghost = ProjectId::from("ghost");

        prop_assert_eq!(ledger.clone().toggle_membership(&ghost), ledger.clone());
        prop_assert_eq!(
            ledger.clone().adjust_checkout(&ghost, &set_id(s), delta),
            ledger.clone()
        );

        let missing_set = HardwareSetId::from("missing");
        for project in ledger.projects() {
            let next = ledger.clone().adjust_checkout(project.id(), &missing_set, delta.max(0));
            prop_assert_eq!(&next, &ledger);
        }
    }
}
