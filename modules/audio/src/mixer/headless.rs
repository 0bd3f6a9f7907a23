use std::sync::Arc;
use std::thread::Builder;
use std::time::{Duration, Instant};

use crate::errors::{Error, Result};

use super::{AudioParams, Shared};

const TICK: Duration = Duration::from_millis(10);

pub(crate) fn run(shared: Arc<Shared>, params: AudioParams) -> Result<()> {
    info!("Create headless audio mixer. {:?}", params);

    Builder::new()
        .name("Audio".into())
        .spawn(move || {
            let channels = params.channels as usize;
            let sample_rate = f64::from(params.sample_rate);

            let mut bufs = Vec::new();
            let mut last = Instant::now();
            let mut carry = 0.0;

            loop {
                std::thread::sleep(TICK);

                let now = Instant::now();
                carry += now.duration_since(last).as_secs_f64() * sample_rate;
                last = now;

                let frames = carry as usize;
                carry -= frames as f64;

                bufs.resize(frames * channels, 0.0);
                if !shared.render(&mut bufs) {
                    break;
                }
            }
        })
        .map_err(|err| Error::Output(format!("Failed to create thread for audio mixer: {}", err)))?;

    Ok(())
}
