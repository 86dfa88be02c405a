use crossterm::event::KeyCode;
use draw_poker::agents::HumanAction;
use draw_poker::cards::hand_from_tokens;
use draw_poker::evaluator::evaluate;
use draw_poker::game::{ActionRecord, ActionVerb, Seat};
use draw_poker::session::{HandView, MatchEvent, Standing};
use draw_poker::tui::app::{AppState, InputAction, Prompt, Reply};
use draw_poker::tui::controller::handle_key;

fn view() -> HandView {
    let cards = hand_from_tokens(&[
        "Queen of Spades",
        "Queen of Hearts",
        "Queen of Diamonds",
        "Five of Clubs",
        "Five of Spades",
    ])
    .unwrap();
    HandView {
        cards,
        strength: evaluate(&cards),
        chips: 950,
        bet: 50,
        pot: 75,
        opponent_bet: 25,
        to_call: 0,
        min_raise: 75,
        max_total: 1000,
        big_blind: 50,
    }
}

fn acting_app() -> AppState {
    let mut app = AppState::default();
    app.begin_action(view());
    app
}

#[test]
fn call_and_fold_keys_reply_immediately() {
    let mut app = acting_app();
    assert_eq!(handle_key(&mut app, KeyCode::Char('2')), Some(Reply::Action(HumanAction::Call)));
    assert_eq!(app.prompt, Prompt::Idle);

    let mut app = acting_app();
    assert_eq!(handle_key(&mut app, KeyCode::Char('f')), Some(Reply::Action(HumanAction::Fold)));
}

#[test]
fn amount_entry_edit_and_cancel() {
    let mut app = acting_app();
    assert_eq!(app.handle_input(InputAction::Bet), None);
    assert!(app.amount_entry_active());
    assert_eq!(app.amount_entry_text(), Some("75"));

    let _ = app.handle_input(InputAction::AmountDigit(5));
    assert_eq!(app.amount_entry_text(), Some("755"));
    let _ = app.handle_input(InputAction::AmountBackspace);
    assert_eq!(app.amount_entry_text(), Some("75"));
    let _ = app.handle_input(InputAction::AmountIncBb);
    assert_eq!(app.amount_entry_text(), Some("125"));
    let _ = app.handle_input(InputAction::AmountDecBb);
    let _ = app.handle_input(InputAction::AmountDecBb);
    let _ = app.handle_input(InputAction::AmountDecBb);
    assert_eq!(app.amount_entry_text(), Some("0"));

    let _ = app.handle_input(InputAction::AmountCancel);
    assert!(!app.amount_entry_active());
    assert_eq!(app.prompt, Prompt::Action);
}

#[test]
fn amount_submit_through_keys() {
    let mut app = acting_app();
    assert_eq!(handle_key(&mut app, KeyCode::Char('b')), None);
    // Letters are ignored while typing an amount.
    assert_eq!(handle_key(&mut app, KeyCode::Char('c')), None);
    assert_eq!(handle_key(&mut app, KeyCode::Backspace), None);
    assert_eq!(handle_key(&mut app, KeyCode::Backspace), None);
    for c in ['3', '0', '0'] {
        assert_eq!(handle_key(&mut app, KeyCode::Char(c)), None);
    }
    assert_eq!(handle_key(&mut app, KeyCode::Enter), Some(Reply::Action(HumanAction::Bet(300))));
}

#[test]
fn empty_amount_submits_zero() {
    let mut app = acting_app();
    let _ = app.handle_input(InputAction::Bet);
    let _ = app.handle_input(InputAction::AmountBackspace);
    let _ = app.handle_input(InputAction::AmountBackspace);
    assert_eq!(app.handle_input(InputAction::AmountSubmit), Some(Reply::Action(HumanAction::Bet(0))));
}

#[test]
fn continue_prompt_answers() {
    let mut app = AppState::default();
    app.begin_continue();
    assert_eq!(handle_key(&mut app, KeyCode::Char(' ')), Some(Reply::Continue(true)));
    app.begin_continue();
    assert_eq!(handle_key(&mut app, KeyCode::Char('q')), Some(Reply::Continue(false)));
    assert!(app.quit_requested());
}

#[test]
fn quit_while_acting_folds_and_flags() {
    let mut app = acting_app();
    assert_eq!(handle_key(&mut app, KeyCode::Char('q')), Some(Reply::Action(HumanAction::Fold)));
    assert!(app.quit_requested());
}

#[test]
fn keys_do_nothing_while_idle() {
    let mut app = AppState::default();
    assert_eq!(handle_key(&mut app, KeyCode::Char('2')), None);
    assert_eq!(handle_key(&mut app, KeyCode::Enter), None);
}

#[test]
fn events_update_the_display_state() {
    let mut app = AppState::default();
    app.apply_event(&MatchEvent::HandStarted {
        number: 3,
        dealer: Seat::Computer,
        blinds: [25, 50],
    });
    assert_eq!(app.hand_number, 3);
    assert_eq!(app.dealer, Some(Seat::Computer));
    assert_eq!(app.blinds, [25, 50]);

    // Stacks follow the blinds and each action, not just settlement.
    let small = ActionRecord { seat: Seat::Human, verb: ActionVerb::SmallBlind, paid: 25, total: 25 };
    let big = ActionRecord { seat: Seat::Computer, verb: ActionVerb::BigBlind, paid: 50, total: 50 };
    app.apply_event(&MatchEvent::BlindsPosted { small, big, pot: 75, chips: [975, 950] });
    assert_eq!(app.chips, [975, 950]);
    assert_eq!(app.pot, 75);
    let call = ActionRecord { seat: Seat::Human, verb: ActionVerb::Call, paid: 25, total: 50 };
    app.apply_event(&MatchEvent::Action { record: call, pot: 100, chips: [950, 950] });
    assert_eq!(app.chips, [950, 950]);
    assert!(app.log().iter().any(|l| l == "You call with 25 (total bet 50). Pot is now 100"));
    let v = view();
    app.apply_event(&MatchEvent::HandDealt { cards: v.cards, strength: v.strength.clone() });
    assert_eq!(app.hand().map(|(_, s)| s.name()), Some("Full House"));
    app.apply_event(&MatchEvent::MatchOver {
        standing: Standing::Tied,
        chips: [1000, 1000],
        hands_played: 3,
    });
    assert_eq!(app.prompt, Prompt::GameOver);
    assert_eq!(app.chips, [1000, 1000]);
    assert!(app.log().iter().any(|l| l == "It's a tie!"));
}
