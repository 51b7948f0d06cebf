use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wheel_shared::rotation::slice_center;
use wheel_shared::{
    default_segments, drive_spin, load_spin_count, normalize_angle, CounterStore, ManualScheduler,
    MemoryStore, SessionEvent, WheelConfig, WheelSession, TAU,
};

const FRAME_MS: f64 = 16.0;

/// Runs one spin through the scheduler, saving the counter like the page does.
fn spin_once(
    session: &Rc<RefCell<WheelSession>>,
    store: &Rc<RefCell<MemoryStore>>,
    rng: &mut StdRng,
    start: f64,
) -> (Option<usize>, Vec<SessionEvent>, f64) {
    let scheduler = ManualScheduler::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let index = session.borrow_mut().request_spin(rng);
    if index.is_some() {
        let log = events.clone();
        let store = store.clone();
        drive_spin(
            session.clone(),
            scheduler.clone(),
            Rc::new(move |event: SessionEvent| {
                if let SessionEvent::Completed { spin_count, .. } = event {
                    store.borrow_mut().save(spin_count).unwrap();
                }
                log.borrow_mut().push(event);
            }),
        );
    }
    let end = scheduler.run_until_idle(start, FRAME_MS, 10_000);
    let events = events.borrow().clone();
    (index, events, end)
}

#[test]
fn spin_lands_under_pointer() {
    let config = WheelConfig::default();
    let session = Rc::new(RefCell::new(WheelSession::new(default_segments(), config.clone(), 0)));
    let store = Rc::new(RefCell::new(MemoryStore::new()));
    let mut rng = StdRng::seed_from_u64(99);

    let mut now = 0.0;
    for _ in 0..30 {
        let (index, events, end) = spin_once(&session, &store, &mut rng, now);
        let index = index.expect("idle wheel accepts a spin");
        now = end;

        let landed = events
            .iter()
            .find_map(|e| match e {
                SessionEvent::Landed { index, rotation } => Some((*index, *rotation)),
                _ => None,
            })
            .expect("spin lands");
        assert_eq!(landed.0, index);

        let aligned = normalize_angle(slice_center(index, 5) + landed.1);
        let pointer = normalize_angle(config.pointer_angle);
        let diff = normalize_angle(aligned - pointer);
        assert!(diff.min(TAU - diff) < 1e-6);

        session.borrow_mut().dismiss_result();
    }
}

#[test]
fn frames_only_move_forward() {
    let session = Rc::new(RefCell::new(WheelSession::new(default_segments(), WheelConfig::default(), 0)));
    let store = Rc::new(RefCell::new(MemoryStore::new()));
    let mut rng = StdRng::seed_from_u64(5);
    let start = session.borrow().rotation();

    let (_, events, _) = spin_once(&session, &store, &mut rng, 1000.0);
    let rotations: Vec<f64> = events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::Frame { rotation } => Some(*rotation),
            _ => None,
        })
        .collect();
    assert!(rotations.len() > 100);
    assert_eq!(rotations[0], start);
    assert!(rotations.windows(2).all(|w| w[1] >= w[0]));
    assert!(rotations.last().copied().unwrap_or(0.0) > start + 5.0 * TAU);
}

#[test]
fn counter_survives_reload() {
    let store = Rc::new(RefCell::new(MemoryStore::new()));
    let mut rng = StdRng::seed_from_u64(1);

    let first = Rc::new(RefCell::new(WheelSession::new(
        default_segments(),
        WheelConfig::default(),
        load_spin_count(&*store.borrow()),
    )));
    let mut now = 0.0;
    for expected in 1..=3u64 {
        let (_, events, end) = spin_once(&first, &store, &mut rng, now);
        now = end;
        assert!(events
            .iter()
            .any(|e| matches!(e, SessionEvent::Completed { spin_count, .. } if *spin_count == expected)));
        assert_eq!(load_spin_count(&*store.borrow()), expected);
    }
    drop(first);

    // A fresh session reading the same store picks up where the last one ended.
    let reloaded = WheelSession::new(
        default_segments(),
        WheelConfig::default(),
        load_spin_count(&*store.borrow()),
    );
    assert_eq!(reloaded.spin_count(), 3);
}

#[test]
fn second_trigger_while_spinning_is_ignored() {
    let session = Rc::new(RefCell::new(WheelSession::new(default_segments(), WheelConfig::default(), 0)));
    let scheduler = ManualScheduler::new();
    let mut rng = StdRng::seed_from_u64(8);
    let completions = Rc::new(RefCell::new(0u32));

    assert!(session.borrow_mut().request_spin(&mut rng).is_some());
    let seen = completions.clone();
    drive_spin(
        session.clone(),
        scheduler.clone(),
        Rc::new(move |event: SessionEvent| {
            if matches!(event, SessionEvent::Completed { .. }) {
                *seen.borrow_mut() += 1;
            }
        }),
    );

    let mut now = 0.0;
    for _ in 0..50 {
        scheduler.run_frame(now);
        now += FRAME_MS;
        assert!(session.borrow_mut().request_spin(&mut rng).is_none());
    }
    assert_eq!(scheduler.pending(), 1, "only the first loop is scheduled");

    scheduler.run_until_idle(now, FRAME_MS, 10_000);
    assert_eq!(*completions.borrow(), 1);
    assert_eq!(session.borrow().spin_count(), 1);
}

#[test]
fn subscription_never_wins_before_threshold() {
    let mut rng = StdRng::seed_from_u64(20);
    let mut session = WheelSession::new(default_segments(), WheelConfig::default(), 0);
    for _ in 0..2000 {
        let index = session.request_spin(&mut rng).expect("idle");
        assert_ne!(index, 3);
        // Reset without animating; only selection matters here.
        session = WheelSession::new(default_segments(), WheelConfig::default(), 0);
    }
}
