//! Main event loop.

use crossterm::event::{Event as CrosstermEvent, EventStream};
use disclosure::Disclosure;
use futures::StreamExt;
use log::{debug, info, trace};

use crate::config::TermConfig;
use crate::error::TermError;
use crate::hover::HoverTracker;
use crate::input::{Action, translate};
use crate::render::paint;
use crate::terminal::TerminalGuard;

/// What woke the loop.
enum Input {
    Terminal(Option<std::io::Result<CrosstermEvent>>),
    HoverOpened,
}

/// Decide whether this pass repaints, returning the visibility to paint.
///
/// The dirty flag is taken before visibility is read, so a delayed open
/// that lands after the read stays flagged for the next pass.
pub fn next_paint(disclosure: &Disclosure, forced: bool) -> Option<bool> {
    let dirty = disclosure.take_dirty();
    (forced || dirty).then(|| disclosure.is_open())
}

/// Run the host until the user quits or input ends.
pub async fn run(config: TermConfig) -> Result<(), TermError> {
    let mut term = TerminalGuard::new()?;

    let disclosure = Disclosure::with_config(config.disclosure);
    info!(
        "Started {} (hover delay {:?})",
        disclosure.id(),
        disclosure.config().hover_delay
    );

    let mut events = EventStream::new();
    let mut hover = HoverTracker::new();
    let mut region = paint(term.stdout(), &config, disclosure.is_open())?;

    loop {
        let input = tokio::select! {
            event = events.next() => Input::Terminal(event),
            () = disclosure.hover_opened() => Input::HoverOpened,
        };

        let mut redraw = false;
        match input {
            Input::Terminal(Some(event)) => {
                let event = event?;
                trace!("Crossterm event: {:?}", event);

                for action in translate(&event, region, &mut hover) {
                    match action {
                        Action::Forward(ev) => {
                            let result = disclosure.handle(ev);
                            debug!("{:?} -> {:?}", ev, result);
                        }
                        Action::Redraw => redraw = true,
                        Action::Quit => {
                            disclosure.teardown();
                            info!("Quit requested");
                            return Ok(());
                        }
                    }
                }
            }
            Input::Terminal(None) => break,
            // Something changed off the input path; always repaint
            Input::HoverOpened => redraw = true,
        }

        if let Some(change) = disclosure.take_change() {
            info!("{}: {:?}", disclosure.id(), change);
        }

        if let Some(open) = next_paint(&disclosure, redraw) {
            region = paint(term.stdout(), &config, open)?;
        }
    }

    disclosure.teardown();
    info!("Input stream closed");
    Ok(())
}
