use std::{fs, io, io::BufReader, path::PathBuf};

use rodio::{decoder, OutputStreamBuilder, Sink};
use thiserror::Error;

/// a notification failure, reported but never fatal to the alarm loop
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("couldn't open sound file {path}: {source}")]
    Open {
        path: PathBuf,
        source: io::Error,
    },
    #[error("couldn't decode sound file: {0}")]
    Decode(#[from] decoder::DecoderError),
    #[error("couldn't open an audio output stream: {0}")]
    Stream(#[from] rodio::StreamError),
}

/// the side effect performed once per fired alarm
pub trait NotificationSink {
    /// # Errors
    /// when the notification couldn't be delivered
    fn notify(&mut self) -> Result<(), NotifyError>;
}

/// plays a sound file once per notification
#[derive(Debug)]
pub struct SoundSink {
    path: PathBuf,
}

impl SoundSink {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl NotificationSink for SoundSink {
    fn notify(&mut self) -> Result<(), NotifyError> {
        let file = fs::File::open(&self.path).map_err(|source| NotifyError::Open {
            path: self.path.clone(),
            source,
        })?;
        // the stream has to outlive playback, which blocks here anyway
        let stream = OutputStreamBuilder::open_default_stream()?;
        let sink = Sink::connect_new(stream.mixer());
        sink.append(decoder::Decoder::new(BufReader::new(file))?);
        sink.play();
        sink.sleep_until_end();
        Ok(())
    }
}
