//! Sound effects and background music.
//!
//! Everything is synthesized at startup; there are no asset files to load.
//! Failing to open an audio device leaves the game silent instead of
//! failing the process.

use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink, Source};

const SAMPLE_RATE: u32 = 44_100;
const SFX_VOLUME: f32 = 0.5;
const MUSIC_VOLUME: f32 = 0.2;

/// Short effects triggered by tick outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    /// Food eaten
    Eat,
    /// Wall or tail collision
    Crash,
}

pub struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    music: Option<Sink>,
}

impl Audio {
    pub fn new() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            music: None,
        })
    }

    /// Fire-and-forget playback on a detached sink
    pub fn play(&self, sfx: Sfx) {
        let samples = match sfx {
            Sfx::Eat => eat_samples(),
            Sfx::Crash => crash_samples(),
        };

        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.set_volume(SFX_VOLUME);
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
            sink.detach();
        }
    }

    /// Start the looping background track; stops any earlier one
    pub fn start_music(&mut self) {
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.set_volume(MUSIC_VOLUME);
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, music_samples()).repeat_infinite());
            self.music = Some(sink);
        }
    }

    pub fn stop_music(&mut self) {
        if let Some(sink) = self.music.take() {
            sink.stop();
        }
    }
}

/// A sine note with a linear fade-out
fn tone(freq: f32, secs: f32, gain: f32) -> Vec<f32> {
    let len = (SAMPLE_RATE as f32 * secs) as usize;
    (0..len)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let env = 1.0 - i as f32 / len as f32;
            (t * freq * std::f32::consts::TAU).sin() * env * gain
        })
        .collect()
}

/// Two quick ascending blips
fn eat_samples() -> Vec<f32> {
    let mut samples = tone(660.0, 0.07, 0.25);
    samples.extend(tone(880.0, 0.09, 0.22));
    samples
}

/// Falling square-wave buzz with a fast decay
fn crash_samples() -> Vec<f32> {
    let len = (SAMPLE_RATE as f32 * 0.45) as usize;
    let mut samples = Vec::with_capacity(len);
    let mut phase = 0.0f32;

    for i in 0..len {
        let progress = i as f32 / len as f32;
        let freq = 330.0 - 250.0 * progress;
        phase = (phase + freq / SAMPLE_RATE as f32).fract();
        let env = (1.0 - progress).powi(2) * 0.3;
        let wave = if phase < 0.5 { 1.0 } else { -1.0 };
        samples.push(wave * env);
    }

    samples
}

/// Eight-note minor loop, quiet enough to sit under the effects
fn music_samples() -> Vec<f32> {
    const NOTES: [f32; 8] = [
        220.0, 261.63, 329.63, 261.63, 220.0, 196.0, 246.94, 196.0,
    ];
    let gap = (SAMPLE_RATE as f32 * 0.03) as usize;

    let mut samples = Vec::new();
    for freq in NOTES {
        samples.extend(tone(freq, 0.22, 0.4));
        samples.extend(std::iter::repeat(0.0).take(gap));
    }
    samples
}
