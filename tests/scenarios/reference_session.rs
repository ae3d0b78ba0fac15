//! Scenario: A user works through the reference dataset
//!
//! Journey: start from the built-in dataset, join a project, move hardware
//! between projects, then leave.
//!
//! Success Criteria:
//! - Header counts and per-row numbers follow every step
//! - Leaving a project keeps its hardware checked out
//! - Guests cannot move hardware

use hwmgr::application::{parse_script, ActionStatus, BlockReason, LedgerView, Session};
use hwmgr::infrastructure::BuiltinDatasetRepository;
use hwmgr::{HardwareSetId, ProjectId};

fn start() -> Session {
    let (session, warnings) =
        Session::from_repository(&BuiltinDatasetRepository::new()).expect("builtin loads");
    assert!(warnings.is_empty());
    session
}

/// SCENARIO: join, check out, hand back, leave
#[test]
fn scenario_join_checkout_leave() {
    let mut session = start();
    let p2 = ProjectId::from("p2");
    let hs1 = HardwareSetId::from("hs1");

    let view = LedgerView::build(session.ledger());
    assert_eq!((view.summary.joined, view.summary.total), (1, 3));
    let row = &view.project(&p2).unwrap().rows[0];
    assert!(!row.can_increase && !row.can_decrease);

    let reports = session.apply_all(
        parse_script(
            "checkout p2 hs1 4\n\
             join p2\n\
             checkout p2 hs1 4\n\
             checkout p2 hs1 20\n\
             checkin p2 hs1 1\n\
             leave p2\n",
        )
        .unwrap(),
    );

    assert_eq!(
        reports[0].status,
        ActionStatus::Blocked {
            reason: BlockReason::NotMember
        }
    );
    assert_eq!(reports[2].available, Some(8));
    assert!(reports[3].status.is_clamped());
    assert_eq!(reports[3].qty, Some(12));
    assert_eq!(reports[4].qty, Some(11));
    assert_eq!(session.log().len(), 6);

    let view = LedgerView::build(session.ledger());
    assert_eq!(view.summary.joined, 1);
    let card = view.project(&p2).unwrap();
    assert!(!card.is_member);

    let row = &card.rows[0];
    assert_eq!(row.set_id, hs1);
    assert_eq!(row.qty, 11);
    assert_eq!(row.in_use, 19);
    assert_eq!(row.available, 1);
    assert_eq!(row.utilization_percent, 95);
    assert!(row.high_usage);
    assert!(!row.can_decrease);
}

/// SCENARIO: the header chips track availability after each step
#[test]
fn scenario_header_tracks_availability() {
    let mut session = start();

    let available = |s: &Session| -> Vec<u32> {
        LedgerView::build(s.ledger())
            .sets
            .iter()
            .map(|set| set.available)
            .collect()
    };
    assert_eq!(available(&session), vec![12, 7, 6]);

    session.apply_all(parse_script("adjust p1 hs2 -2\nadjust p1 hs3 +6").unwrap());
    assert_eq!(available(&session), vec![12, 9, 0]);

    let view = LedgerView::build(session.ledger());
    let sensors = &view.projects[0].rows[2];
    assert!(!sensors.can_increase);
    assert!(sensors.can_decrease);
    assert_eq!(sensors.utilization_percent, 100);
}
