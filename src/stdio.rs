//! Newline-delimited JSON transport between a host process and a panel.

use std::io;

use sf_explorer_panel::{Explorer, HostMessage, OutboundMessage, PanelController, PanelEvent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Run one panel over a line-oriented byte stream.
///
/// Each input line is a [`HostMessage`]; unrecognized lines are logged and
/// skipped. Each notification is written to `output` as one JSON line.
/// Returns after a `dispose` event, or after end of input once every
/// command read so far has been answered.
pub async fn serve<R, W>(explorer: Explorer, input: R, mut output: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (view_tx, mut view_rx) = mpsc::unbounded_channel();
    let (events_tx, events_rx) = mpsc::unbounded_channel();

    let controller = PanelController::new(explorer, view_tx).run(events_rx);
    let (_, read, written) = tokio::join!(
        controller,
        forward_events(input, events_tx),
        write_notifications(&mut view_rx, &mut output),
    );

    read?;
    written
}

/// Feed input lines to the controller until end of input or `dispose`.
/// Returning drops `events`, which lets the controller finish its queue.
async fn forward_events<R>(input: R, events: UnboundedSender<PanelEvent>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event = match serde_json::from_str::<HostMessage>(line) {
            Ok(message) => PanelEvent::from(message),
            Err(e) => {
                warn!(error = %e, line, "Ignoring unrecognized host message");
                continue;
            }
        };

        let dispose = event == PanelEvent::Dispose;
        if events.send(event).is_err() || dispose {
            break;
        }
    }

    debug!("Host input finished");
    Ok(())
}

async fn write_notifications<W>(
    notifications: &mut UnboundedReceiver<OutboundMessage>,
    output: &mut W,
) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(message) = notifications.recv().await {
        let mut line = serde_json::to_vec(&message).map_err(io::Error::other)?;
        line.push(b'\n');
        output.write_all(&line).await?;
        output.flush().await?;
    }
    Ok(())
}
