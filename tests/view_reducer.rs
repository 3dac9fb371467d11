use viewstate::mvi::Reducer;
use viewstate::view::{Color, ViewAction, ViewReducer, ViewState};

fn apply_all(state: ViewState, actions: impl IntoIterator<Item = ViewAction>) -> ViewState {
    actions.into_iter().fold(state, ViewReducer::reduce)
}

#[test]
fn only_the_named_field_changes() {
    let base = ViewState {
        count: 10,
        text: "base".into(),
        color: Color::Orange,
        is_good: true,
    };

    let cases = [
        (ViewAction::SetCount(11), "count"),
        (ViewAction::SetText("changed".into()), "text"),
        (ViewAction::SetColor(Color::Red), "color"),
        (ViewAction::ToggleGood, "is_good"),
    ];

    for (action, field) in cases {
        let next = ViewReducer::reduce(base.clone(), action);
        assert_eq!(next.count == base.count, field != "count", "{field}");
        assert_eq!(next.text == base.text, field != "text", "{field}");
        assert_eq!(next.color == base.color, field != "color", "{field}");
        assert_eq!(next.is_good == base.is_good, field != "is_good", "{field}");
    }
}

#[test]
fn scenario_sequence_from_default() {
    let state = apply_all(
        ViewState::default(),
        [ViewAction::SetCount(5), ViewAction::SetColor(Color::Yellow)],
    );
    assert_eq!(
        state,
        ViewState {
            count: 5,
            text: "hello".into(),
            color: Color::Yellow,
            is_good: true,
        }
    );
}

#[test]
fn last_write_wins_per_field() {
    let state = apply_all(
        ViewState::default(),
        [
            ViewAction::SetText("first".into()),
            ViewAction::SetCount(1),
            ViewAction::SetText("second".into()),
            ViewAction::SetCount(i64::MIN),
        ],
    );
    assert_eq!(state.text, "second");
    assert_eq!(state.count, i64::MIN);
}

#[test]
fn decoded_actions_drive_the_reducer() {
    let actions = ["set-count=5", "set-color=yellow", "toggle-good"]
        .iter()
        .map(|raw| raw.parse::<ViewAction>().unwrap());
    let state = apply_all(ViewState::default(), actions);
    assert_eq!(state.count, 5);
    assert_eq!(state.color, Color::Yellow);
    assert!(!state.is_good);
}
