use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use game_core::{
    AdFlowState, AdTicket, BalanceChange, ConfirmBlocker, GameConfig, PaymentMethod, Screen,
    SessionChange, WatchRequest, WithdrawalError,
};
use runtime::{
    AdError, AdProvider, Event, GameScreenEvent, Runtime, RuntimeConfig, RuntimeError,
    RuntimeHandle, SessionEvent, SimulatedAdProvider, Topic, WithdrawalEvent,
};
use tokio::sync::{Notify, broadcast};
use tokio::time::Instant;

fn config() -> RuntimeConfig {
    RuntimeConfig {
        board_seed: Some(42),
        ..RuntimeConfig::default()
    }
}

async fn start(provider: impl AdProvider + 'static) -> (Runtime, RuntimeHandle) {
    start_with(config(), provider).await
}

async fn start_with(
    config: RuntimeConfig,
    provider: impl AdProvider + 'static,
) -> (Runtime, RuntimeHandle) {
    let runtime = Runtime::builder()
        .config(config)
        .ad_provider(provider)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();
    (runtime, handle)
}

/// Provider that blocks until released, then answers with a fixed outcome.
struct GatedProvider {
    gate: Arc<Notify>,
    calls: Arc<AtomicUsize>,
    outcome: Result<bool, AdError>,
}

impl GatedProvider {
    fn new(outcome: Result<bool, AdError>) -> (Self, Arc<Notify>, Arc<AtomicUsize>) {
        let gate = Arc::new(Notify::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = Self {
            gate: Arc::clone(&gate),
            calls: Arc::clone(&calls),
            outcome,
        };
        (provider, gate, calls)
    }
}

#[async_trait]
impl AdProvider for GatedProvider {
    async fn show_rewarded_ad(&self) -> Result<bool, AdError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.outcome.clone()
    }
}

async fn next_game_event(rx: &mut broadcast::Receiver<Event>) -> GameScreenEvent {
    match rx.recv().await.expect("game screen event") {
        Event::GameScreen(event) => event,
        other => panic!("unexpected event on game screen topic: {other:?}"),
    }
}

/// Collects ad state transitions until the flow is back to idle.
async fn transitions_until_idle(
    rx: &mut broadcast::Receiver<Event>,
) -> (Vec<AdFlowState>, Vec<GameScreenEvent>) {
    let mut states = vec![AdFlowState::Idle];
    let mut others = Vec::new();
    loop {
        match next_game_event(rx).await {
            GameScreenEvent::AdStateChanged { to, .. } => {
                states.push(to);
                if to == AdFlowState::Idle {
                    return (states, others);
                }
            }
            other => others.push(other),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn completed_ad_credits_reward_once_and_returns_to_idle() {
    let provider = SimulatedAdProvider::new(Duration::from_millis(1_500), true);
    let (_runtime, handle) = start(provider).await;
    let mut game_rx = handle.subscribe(Topic::GameScreen);
    let mut session_rx = handle.subscribe(Topic::Session);
    let started = Instant::now();

    let request = handle.watch_ad().await.unwrap();
    assert_eq!(request, WatchRequest::Started(AdTicket(0)));

    let (states, others) = transitions_until_idle(&mut game_rx).await;
    assert_eq!(
        states,
        vec![
            AdFlowState::Idle,
            AdFlowState::Loading,
            AdFlowState::Rewarded,
            AdFlowState::Idle
        ]
    );
    assert_eq!(
        others,
        vec![GameScreenEvent::RewardGranted {
            ticket: AdTicket(0),
            amount: 5_000,
            balance: 140_700,
        }]
    );
    assert!(started.elapsed() >= Duration::from_millis(3_500));

    let balance_event = session_rx.recv().await.unwrap();
    assert_eq!(
        balance_event,
        Event::Session(SessionEvent::BalanceChanged {
            previous: 135_700,
            current: 140_700,
        })
    );
    assert!(session_rx.try_recv().is_err());

    let snapshot = handle.query_session().await.unwrap();
    assert_eq!(snapshot.player.balance, 140_700);
    assert_eq!(snapshot.ad_state, AdFlowState::Idle);
    assert_eq!(snapshot.rewards_granted, 1);
}

#[tokio::test(start_paused = true)]
async fn declined_ad_leaves_balance_untouched() {
    let provider = SimulatedAdProvider::new(Duration::from_millis(1_500), false);
    let (_runtime, handle) = start(provider).await;
    let mut game_rx = handle.subscribe(Topic::GameScreen);

    handle.watch_ad().await.unwrap();
    let (states, others) = transitions_until_idle(&mut game_rx).await;

    assert_eq!(
        states,
        vec![AdFlowState::Idle, AdFlowState::Loading, AdFlowState::Idle]
    );
    assert!(others.is_empty());
    assert_eq!(handle.query_session().await.unwrap().player.balance, 135_700);
}

#[tokio::test(start_paused = true)]
async fn provider_failure_is_reported_and_treated_as_no_reward() {
    let (provider, gate, _calls) =
        GatedProvider::new(Err(AdError::Unavailable("no fill".to_string())));
    let (_runtime, handle) = start(provider).await;
    let mut game_rx = handle.subscribe(Topic::GameScreen);

    handle.watch_ad().await.unwrap();
    gate.notify_one();
    let (states, _) = transitions_until_idle(&mut game_rx).await;
    assert_eq!(
        states,
        vec![AdFlowState::Idle, AdFlowState::Loading, AdFlowState::Idle]
    );

    match next_game_event(&mut game_rx).await {
        GameScreenEvent::AdFailed { ticket, reason } => {
            assert_eq!(ticket, AdTicket(0));
            assert!(reason.contains("no fill"));
        }
        other => panic!("expected failure event, got {other:?}"),
    }
    assert_eq!(handle.query_session().await.unwrap().player.balance, 135_700);

    // The flow accepts a new attempt afterwards.
    assert_eq!(
        handle.watch_ad().await.unwrap(),
        WatchRequest::Started(AdTicket(1))
    );
}

#[tokio::test(start_paused = true)]
async fn stuck_provider_times_out_when_configured() {
    let (provider, _gate, _calls) = GatedProvider::new(Ok(true));
    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            ad_timeout: Some(Duration::from_secs(5)),
            ..config()
        })
        .ad_provider(provider)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut game_rx = handle.subscribe(Topic::GameScreen);

    handle.watch_ad().await.unwrap();
    let (states, _) = transitions_until_idle(&mut game_rx).await;
    assert_eq!(states.last(), Some(&AdFlowState::Idle));
    assert!(matches!(
        next_game_event(&mut game_rx).await,
        GameScreenEvent::AdFailed { .. }
    ));
    assert_eq!(handle.query_session().await.unwrap().player.balance, 135_700);
}

#[tokio::test(start_paused = true)]
async fn watch_requests_are_ignored_while_busy() {
    let (provider, gate, calls) = GatedProvider::new(Ok(true));
    let (_runtime, handle) = start(provider).await;
    let mut game_rx = handle.subscribe(Topic::GameScreen);

    assert_eq!(
        handle.watch_ad().await.unwrap(),
        WatchRequest::Started(AdTicket(0))
    );
    assert_eq!(
        handle.watch_ad().await.unwrap(),
        WatchRequest::Ignored(AdFlowState::Loading)
    );

    gate.notify_one();
    loop {
        if let GameScreenEvent::RewardGranted { .. } = next_game_event(&mut game_rx).await {
            break;
        }
    }
    assert_eq!(
        handle.watch_ad().await.unwrap(),
        WatchRequest::Ignored(AdFlowState::Rewarded)
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let snapshot = handle.query_session().await.unwrap();
    assert_eq!(snapshot.player.balance, 140_700);
    assert_eq!(snapshot.rewards_granted, 1);

    let (states, _) = transitions_until_idle(&mut game_rx).await;
    assert_eq!(states, vec![AdFlowState::Idle, AdFlowState::Idle]);
    assert_eq!(
        handle.watch_ad().await.unwrap(),
        WatchRequest::Started(AdTicket(1))
    );
}

#[tokio::test(start_paused = true)]
async fn reward_lands_even_after_leaving_game_screen() {
    let (provider, gate, _calls) = GatedProvider::new(Ok(true));
    let (_runtime, handle) = start(provider).await;
    let mut game_rx = handle.subscribe(Topic::GameScreen);

    handle.watch_ad().await.unwrap();
    handle.navigate_to(Screen::Withdrawal).await.unwrap();
    gate.notify_one();

    loop {
        let event = next_game_event(&mut game_rx).await;
        if let GameScreenEvent::RewardGranted { balance, .. } = event {
            assert_eq!(balance, 140_700);
            break;
        }
    }
    let withdrawal = handle.query_withdrawal().await.unwrap();
    assert_eq!(withdrawal.balance, 140_700);
}

#[tokio::test]
async fn withdrawal_eligibility_follows_balance_and_selection() {
    let (_runtime, handle) = start(SimulatedAdProvider::default()).await;
    let mut withdrawal_rx = handle.subscribe(Topic::Withdrawal);
    let mut session_rx = handle.subscribe(Topic::Session);

    let change = handle.navigate_to(Screen::Withdrawal).await.unwrap();
    assert_eq!(
        change,
        SessionChange::Screen {
            from: Screen::Game,
            to: Screen::Withdrawal,
        }
    );
    assert_eq!(
        withdrawal_rx.recv().await.unwrap(),
        Event::Withdrawal(WithdrawalEvent::Opened)
    );
    assert_eq!(
        session_rx.recv().await.unwrap(),
        Event::Session(SessionEvent::ScreenChanged {
            from: Screen::Game,
            to: Screen::Withdrawal,
        })
    );

    let fresh = handle.query_withdrawal().await.unwrap();
    assert_eq!(fresh.amount, None);
    assert_eq!(fresh.method, PaymentMethod::None);
    assert!(!fresh.can_confirm);

    handle.select_amount(200_000).await.unwrap();
    let snapshot = handle.select_method(PaymentMethod::Dana).await.unwrap();
    assert!(!snapshot.can_confirm);
    assert_eq!(
        snapshot.blockers,
        vec![ConfirmBlocker::InsufficientBalance {
            balance: 135_700,
            amount: 200_000,
        }]
    );

    handle.select_amount(100_000).await.unwrap();
    let snapshot = handle.select_method(PaymentMethod::Ovo).await.unwrap();
    assert!(snapshot.can_confirm);
    assert!(snapshot.blockers.is_empty());

    let error = handle.select_amount(1_234).await.unwrap_err();
    assert!(matches!(
        error,
        RuntimeError::Withdrawal(WithdrawalError::UnknownAmount { amount: 1_234 })
    ));
}

#[tokio::test]
async fn withdrawal_form_is_fresh_on_every_entry() {
    let (_runtime, handle) = start(SimulatedAdProvider::default()).await;

    handle.navigate_to(Screen::Withdrawal).await.unwrap();
    handle.select_amount(5_000).await.unwrap();
    handle.select_method(PaymentMethod::Ovo).await.unwrap();

    handle.navigate_to(Screen::Game).await.unwrap();
    assert!(matches!(
        handle.query_withdrawal().await,
        Err(RuntimeError::WithdrawalClosed)
    ));
    assert!(matches!(
        handle.select_amount(5_000).await,
        Err(RuntimeError::WithdrawalClosed)
    ));

    handle.navigate_to(Screen::Withdrawal).await.unwrap();
    let snapshot = handle.query_withdrawal().await.unwrap();
    assert_eq!(snapshot.amount, None);
    assert_eq!(snapshot.method, PaymentMethod::None);
}

#[tokio::test]
async fn add_balance_accumulates_and_ignores_zero() {
    let (_runtime, handle) = start(SimulatedAdProvider::default()).await;

    handle.add_balance(300).await.unwrap();
    handle.add_balance(5_000).await.unwrap();
    assert_eq!(handle.add_balance(0).await.unwrap(), SessionChange::Unchanged);

    let snapshot = handle.query_session().await.unwrap();
    assert_eq!(snapshot.player.balance, 141_000);
    assert_eq!(snapshot.player.level, 15);
}

async fn next_session_event(rx: &mut broadcast::Receiver<Event>) -> SessionEvent {
    match rx.recv().await.expect("session event") {
        Event::Session(event) => event,
        other => panic!("unexpected event on session topic: {other:?}"),
    }
}

/// The event a session change should surface as, if any.
fn expected_event(change: SessionChange) -> Option<SessionEvent> {
    match change {
        SessionChange::Screen { from, to } => Some(SessionEvent::ScreenChanged { from, to }),
        SessionChange::Balance(BalanceChange { previous, current }) => {
            Some(SessionEvent::BalanceChanged { previous, current })
        }
        SessionChange::Unchanged => None,
    }
}

#[tokio::test(start_paused = true)]
async fn session_events_mirror_applied_changes() {
    let game_config = GameConfig::default()
        .with_initial_balance(1_000)
        .with_ad_reward(2_500)
        .with_reward_dwell_ms(500);
    let (provider, gate, _calls) = GatedProvider::new(Ok(true));
    let (_runtime, handle) = start_with(
        RuntimeConfig {
            game_config,
            ..config()
        },
        provider,
    )
    .await;
    let mut session_rx = handle.subscribe(Topic::Session);

    let credit = handle.add_balance(250).await.unwrap();
    assert_eq!(
        credit,
        SessionChange::Balance(BalanceChange {
            previous: 1_000,
            current: 1_250,
        })
    );
    assert_eq!(expected_event(credit), Some(next_session_event(&mut session_rx).await));

    // Zero credit publishes nothing; the next event belongs to navigation.
    assert_eq!(expected_event(handle.add_balance(0).await.unwrap()), None);
    let change = handle.navigate_to(Screen::Withdrawal).await.unwrap();
    assert_eq!(expected_event(change), Some(next_session_event(&mut session_rx).await));

    // The ad reward goes through the same path as a direct credit.
    handle.watch_ad().await.unwrap();
    gate.notify_one();
    assert_eq!(
        next_session_event(&mut session_rx).await,
        SessionEvent::BalanceChanged {
            previous: 1_250,
            current: 3_750,
        }
    );
    assert_eq!(handle.query_session().await.unwrap().player.balance, 3_750);
}

#[tokio::test]
async fn returning_to_game_screen_deals_a_new_board() {
    let (_runtime, handle) = start(SimulatedAdProvider::default()).await;
    let mut game_rx = handle.subscribe(Topic::GameScreen);
    let board = handle.query_session().await.unwrap().board;

    handle.navigate_to(Screen::Withdrawal).await.unwrap();
    assert_eq!(handle.query_session().await.unwrap().board, board);

    handle.navigate_to(Screen::Game).await.unwrap();
    assert_eq!(
        game_rx.recv().await.unwrap(),
        Event::GameScreen(GameScreenEvent::BoardReshuffled)
    );
    assert_ne!(handle.query_session().await.unwrap().board, board);

    // Re-selecting the game screen keeps the board.
    let current = handle.query_session().await.unwrap().board;
    handle.navigate_to(Screen::Game).await.unwrap();
    assert_eq!(handle.query_session().await.unwrap().board, current);
}

#[tokio::test]
async fn seeded_boards_are_reproducible_and_reshuffle_resamples() {
    let (_first_runtime, first) = start(SimulatedAdProvider::default()).await;
    let (_second_runtime, second) = start(SimulatedAdProvider::default()).await;
    let mut game_rx = first.subscribe(Topic::GameScreen);

    let board = first.query_session().await.unwrap().board;
    assert_eq!(board, second.query_session().await.unwrap().board);
    assert_eq!(board.cells().count(), 64);

    first.reshuffle_board().await.unwrap();
    assert_eq!(
        game_rx.recv().await.unwrap(),
        Event::GameScreen(GameScreenEvent::BoardReshuffled)
    );
    assert_ne!(first.query_session().await.unwrap().board, board);
}

#[tokio::test]
async fn shutdown_waits_for_worker() {
    let (runtime, handle) = start(SimulatedAdProvider::default()).await;
    drop(handle);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn start_uses_default_session() {
    let handle = Runtime::start(config()).await.unwrap();
    let snapshot = handle.query_session().await.unwrap();

    assert_eq!(snapshot.screen, Screen::Game);
    assert_eq!(snapshot.player.balance, 135_700);
    assert_eq!(snapshot.ad_reward, 5_000);
}
