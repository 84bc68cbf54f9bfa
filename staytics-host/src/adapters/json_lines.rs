use std::io::{self, Write};
use std::sync::Mutex;

use serde::Serialize;
use staytics_widget::{ViewDescription, ViewRenderer, WidgetError, WidgetId};

#[derive(Serialize)]
struct Submission<'a> {
    widget_id: WidgetId,
    view: &'a ViewDescription,
}

/// Hands views to the host as one JSON object per line.
pub struct JsonLinesRenderer<W> {
    out: Mutex<W>,
}

impl JsonLinesRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W> ViewRenderer for JsonLinesRenderer<W>
where
    W: Write + Send + 'static,
{
    fn submit(&self, widget_id: WidgetId, view: ViewDescription) -> Result<(), WidgetError> {
        let line = serde_json::to_string(&Submission {
            widget_id,
            view: &view,
        })
        .map_err(|e| WidgetError::SubmitFailed {
            widget_id,
            reason: e.to_string(),
        })?;

        let mut out = self
            .out
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(out, "{}", line)
            .and_then(|_| out.flush())
            .map_err(|e| WidgetError::SubmitFailed {
                widget_id,
                reason: e.to_string(),
            })
    }
}
