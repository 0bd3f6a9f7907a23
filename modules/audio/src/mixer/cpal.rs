use std::sync::Arc;
use std::thread::Builder;

use ::cpal::{self, EventLoop, Format, StreamData, StreamId, UnknownTypeOutputBuffer};

use crate::errors::{Error, Result};

use super::sampler::{sample_f32_to_i16, sample_f32_to_u16};
use super::{AudioParams, Shared};

/// An opened output stream on the default device, not rendered yet.
pub(crate) struct Device {
    events: EventLoop,
    stream: StreamId,
    format: Format,
}

impl Device {
    pub fn open() -> Result<Self> {
        let device = cpal::default_output_device()
            .ok_or_else(|| Error::Output("No available audio output device".into()))?;

        let format = device
            .default_output_format()
            .map_err(|err| Error::Output(format!("{:?}", err)))?;

        let events = EventLoop::new();
        let stream = events
            .build_output_stream(&device, &format)
            .map_err(|err| Error::Output(format!("{:?}", err)))?;

        info!(
            "Create audio mixer based on CPAL. [{:?}] {:?}.",
            device.name(),
            format
        );

        Ok(Device {
            events,
            stream,
            format,
        })
    }

    pub fn params(&self) -> AudioParams {
        AudioParams {
            sample_rate: self.format.sample_rate.0 as u32,
            channels: self.format.channels as u8,
        }
    }

    pub fn run(self, shared: Arc<Shared>) -> Result<()> {
        let Device { events, stream, .. } = self;

        Builder::new()
            .name("Audio".into())
            .spawn(move || {
                let mut bufs: Vec<f32> = Vec::new();

                events.play_stream(stream.clone());
                events.run(move |id, buffer| {
                    if stream != id {
                        return;
                    }

                    if let StreamData::Output { buffer } = buffer {
                        match buffer {
                            UnknownTypeOutputBuffer::U16(mut buffer) => {
                                bufs.resize(buffer.len(), 0.0);
                                shared.render(&mut bufs);
                                for (v, s) in buffer.iter_mut().zip(&bufs) {
                                    *v = sample_f32_to_u16(*s);
                                }
                            }
                            UnknownTypeOutputBuffer::I16(mut buffer) => {
                                bufs.resize(buffer.len(), 0.0);
                                shared.render(&mut bufs);
                                for (v, s) in buffer.iter_mut().zip(&bufs) {
                                    *v = sample_f32_to_i16(*s);
                                }
                            }
                            UnknownTypeOutputBuffer::F32(mut buffer) => {
                                shared.render(&mut buffer);
                            }
                        }
                    }
                })
            })
            .map_err(|err| {
                Error::Output(format!("Failed to create thread for audio mixer: {}", err))
            })?;

        Ok(())
    }
}
