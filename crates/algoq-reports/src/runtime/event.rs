use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::app::{App, AppEvent};
use crate::runtime::{EventResult, key_handler};

pub(crate) fn spawn_event_reader(event_tx: mpsc::UnboundedSender<Event>) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::poll(Duration::from_millis(250)) {
                Ok(true) => {
                    if let Ok(event) = crossterm::event::read()
                        && event_tx.send(event).is_err()
                    {
                        break;
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

pub(crate) async fn process_events(
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    tick: &mut tokio::time::Interval,
) -> EventResult {
    enum LoopSignal {
        AppEvent(Option<AppEvent>),
        Event(Option<Event>),
        Tick,
    }

    // Ticks only trigger a redraw so loading spinners keep moving.
    let signal = tokio::select! {
        biased;
        event = event_rx.recv() => LoopSignal::Event(event),
        app_event = app.next_app_event() => LoopSignal::AppEvent(app_event),
        _ = tick.tick() => LoopSignal::Tick,
    };
    let maybe_event = match signal {
        LoopSignal::Event(event) => event,
        LoopSignal::AppEvent(Some(app_event)) => {
            app.apply_app_events(app_event);
            None
        }
        LoopSignal::AppEvent(None) | LoopSignal::Tick => None,
    };

    if matches!(process_event(app, maybe_event), EventResult::Quit) {
        return EventResult::Quit;
    }

    // Drain remaining queued events before re-rendering so rapid key
    // presses are processed immediately instead of one-per-frame.
    while let Ok(event) = event_rx.try_recv() {
        if matches!(process_event(app, Some(event)), EventResult::Quit) {
            return EventResult::Quit;
        }
    }

    EventResult::Continue
}

fn process_event(app: &mut App, event: Option<Event>) -> EventResult {
    if let Some(Event::Key(key)) = event
        && key.kind == KeyEventKind::Press
    {
        return key_handler::handle_key_event(app, key);
    }

    EventResult::Continue
}
