//! Property tests for session actions.

use proptest::prelude::*;

use hwmgr::application::{parse_script, Action, ActionStatus, BlockReason, Session};
use hwmgr::infrastructure::repositories::reference_dataset;
use hwmgr::{Ledger, ProjectId};

fn action_strategy() -> impl Strategy<Value = Action> {
    let project = prop::sample::select(vec!["p1", "p2", "p3", "p9"]).prop_map(ProjectId::from);
    let set = prop::sample::select(vec!["hs1", "hs2", "hs3", "hs9"]);

    prop_oneof![
        project.clone().prop_map(|project| Action::Toggle { project }),
        project.clone().prop_map(|project| Action::Join { project }),
        project.clone().prop_map(|project| Action::Leave { project }),
        (project.clone(), set.clone(), 0u32..30).prop_map(|(project, set, qty)| Action::CheckOut {
            project,
            set: set.into(),
            qty,
        }),
        (project.clone(), set.clone(), 0u32..30).prop_map(|(project, set, qty)| Action::CheckIn {
            project,
            set: set.into(),
            qty,
        }),
        (project, set, -30i64..30).prop_map(|(project, set, delta)| Action::Adjust {
            project,
            set: set.into(),
            delta,
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: script parsing never panics, whatever the input.
    #[test]
    fn property_parse_script_never_panics(text in "\\PC{0,200}") {
        let _ = parse_script(&text);
    }

    /// PROPERTY: a non-member's hardware never moves, and every action is
    /// logged exactly once in order.
    #[test]
    fn property_session_respects_membership(
        actions in prop::collection::vec(action_strategy(), 0..30),
    ) {
        let mut session = Session::new(Ledger::from(reference_dataset()));

        for (i, action) in actions.into_iter().enumerate() {
            let before = session.ledger().clone();
            let report = session.apply(action);

            prop_assert_eq!(report.seq, i + 1);
            prop_assert_eq!(session.log().len(), i + 1);

            let project = report.action.project();
            let was_member = before.project(project).map(|p| p.is_member());
            if let Some((set, _)) = report.action.checkout_delta() {
                if was_member == Some(false) && before.hardware_set(set).is_some() {
                    prop_assert_eq!(
                        report.status,
                        ActionStatus::Blocked { reason: BlockReason::NotMember }
                    );
                }
            }
            if report.status.is_blocked() || report.status == ActionStatus::NoChange {
                prop_assert_eq!(session.ledger(), &before);
            }
        }
    }
}
