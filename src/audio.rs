use crate::constants::BASE_FREQUENCY_HZ;
use anyhow::anyhow;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use wavesculpt_core::{SinkError, WaveSink};
use web_sys as web;

/// Oscillator with a custom periodic wave behind a gain stage, routed to the
/// context destination. Starts silent.
pub struct WebWaveSink {
    audio_ctx: web::AudioContext,
    oscillator: Option<web::OscillatorNode>,
    gain: web::GainNode,
}

impl WebWaveSink {
    pub fn new(audio_ctx: &web::AudioContext) -> anyhow::Result<Self> {
        let gain = web::GainNode::new(audio_ctx).map_err(|e| anyhow!("GainNode error: {:?}", e))?;
        gain.gain().set_value(0.0);
        let oscillator = web::OscillatorNode::new(audio_ctx)
            .map_err(|e| anyhow!("OscillatorNode error: {:?}", e))?;
        oscillator.frequency().set_value(BASE_FREQUENCY_HZ);
        oscillator
            .connect_with_audio_node(&gain)
            .map_err(|e| anyhow!("connect error: {:?}", e))?;
        gain.connect_with_audio_node(&audio_ctx.destination())
            .map_err(|e| anyhow!("connect error: {:?}", e))?;
        oscillator
            .start()
            .map_err(|e| anyhow!("oscillator start error: {:?}", e))?;
        Ok(Self {
            audio_ctx: audio_ctx.clone(),
            oscillator: Some(oscillator),
            gain,
        })
    }

    /// Browsers keep a context suspended until a user gesture; call this from
    /// one.
    pub fn resume(&self) {
        if self.audio_ctx.state() != web::AudioContextState::Suspended {
            return;
        }
        match self.audio_ctx.resume() {
            Ok(promise) => spawn_local(await_resume(promise)),
            Err(e) => log::warn!("AudioContext resume error: {:?}", e),
        }
    }
}

async fn await_resume(promise: js_sys::Promise) {
    match JsFuture::from(promise).await {
        Ok(_) => log::info!("[audio] context running"),
        Err(e) => log::warn!("AudioContext resume rejected: {:?}", e),
    }
}

impl WaveSink for WebWaveSink {
    fn set_periodic_wave(&mut self, real: &[f32], imag: &[f32]) -> Result<(), SinkError> {
        let oscillator = self.oscillator.as_ref().ok_or(SinkError::Unavailable)?;
        let mut real = real.to_vec();
        let mut imag = imag.to_vec();
        let wave = self
            .audio_ctx
            .create_periodic_wave(&mut real, &mut imag)
            .map_err(|e| SinkError::Rejected(format!("{:?}", e)))?;
        oscillator.set_periodic_wave(&wave);
        Ok(())
    }

    fn ramp_gain(&mut self, target: f32, duration_sec: f64) -> Result<(), SinkError> {
        let param = self.gain.gain();
        let now = self.audio_ctx.current_time();
        let rejected = |e| SinkError::Rejected(format!("{:?}", e));
        param.cancel_scheduled_values(now).map_err(rejected)?;
        param
            .set_value_at_time(param.value(), now)
            .map_err(rejected)?;
        param
            .linear_ramp_to_value_at_time(target, now + duration_sec.max(0.0))
            .map_err(rejected)?;
        Ok(())
    }

    fn close(&mut self) {
        if let Some(osc) = self.oscillator.take() {
            _ = osc.stop();
            _ = osc.disconnect();
        }
        _ = self.gain.disconnect();
        _ = self.audio_ctx.close();
        log::info!("[audio] oscillator released");
    }
}
