//! Effect-parameter channels that drive the light generators.

use crate::error::BusError;
use crate::harmonics::unit;

/// Named bus topic for each effect channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    ChorusChange,
    DelayChange,
    PhaserChange,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::ChorusChange, Topic::DelayChange, Topic::PhaserChange];

    pub const fn name(self) -> &'static str {
        match self {
            Topic::ChorusChange => "chorusChange",
            Topic::DelayChange => "delayChange",
            Topic::PhaserChange => "phaserChange",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// Immutable payload carried on the bus. Values are clamped to [0, 1] by the
/// constructors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamEvent {
    ChorusChange { depth: f32 },
    DelayChange { wet: f32 },
    PhaserChange { wet: f32 },
}

impl ParamEvent {
    pub fn chorus(depth: f32) -> Self {
        Self::ChorusChange { depth: unit(depth) }
    }

    pub fn delay(wet: f32) -> Self {
        Self::DelayChange { wet: unit(wet) }
    }

    pub fn phaser(wet: f32) -> Self {
        Self::PhaserChange { wet: unit(wet) }
    }

    pub fn on(topic: Topic, value: f32) -> Self {
        match topic {
            Topic::ChorusChange => Self::chorus(value),
            Topic::DelayChange => Self::delay(value),
            Topic::PhaserChange => Self::phaser(value),
        }
    }

    /// Decode an external notification. A missing or non-finite value counts
    /// as 0; only the topic name can fail.
    pub fn from_raw(topic: &str, value: Option<f64>) -> Result<Self, BusError> {
        let topic = Topic::from_name(topic).ok_or_else(|| BusError::UnknownTopic(topic.into()))?;
        let v = value.filter(|v| v.is_finite()).unwrap_or(0.0) as f32;
        Ok(Self::on(topic, v))
    }

    pub const fn topic(&self) -> Topic {
        match self {
            Self::ChorusChange { .. } => Topic::ChorusChange,
            Self::DelayChange { .. } => Topic::DelayChange,
            Self::PhaserChange { .. } => Topic::PhaserChange,
        }
    }

    pub const fn value(&self) -> f32 {
        match *self {
            Self::ChorusChange { depth } => depth,
            Self::DelayChange { wet } | Self::PhaserChange { wet } => wet,
        }
    }
}

/// Current effect intensities, each in [0, 1], all zero by default.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EffectParameterState {
    pub chorus_depth: f32,
    pub delay_wet: f32,
    pub phaser_wet: f32,
}

impl EffectParameterState {
    pub fn apply(&mut self, event: &ParamEvent) {
        let v = unit(event.value());
        match event.topic() {
            Topic::ChorusChange => self.chorus_depth = v,
            Topic::DelayChange => self.delay_wet = v,
            Topic::PhaserChange => self.phaser_wet = v,
        }
    }

    pub fn intensity(&self, topic: Topic) -> f32 {
        match topic {
            Topic::ChorusChange => self.chorus_depth,
            Topic::DelayChange => self.delay_wet,
            Topic::PhaserChange => self.phaser_wet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_names_round_trip() {
        for t in Topic::ALL {
            assert_eq!(Topic::from_name(t.name()), Some(t));
        }
        assert_eq!(Topic::from_name("reverbChange"), None);
    }

    #[test]
    fn raw_values_default_and_clamp() {
        assert_eq!(
            ParamEvent::from_raw("chorusChange", None),
            Ok(ParamEvent::ChorusChange { depth: 0.0 })
        );
        assert_eq!(
            ParamEvent::from_raw("delayChange", Some(f64::NAN)),
            Ok(ParamEvent::DelayChange { wet: 0.0 })
        );
        assert_eq!(
            ParamEvent::from_raw("phaserChange", Some(3.0)),
            Ok(ParamEvent::PhaserChange { wet: 1.0 })
        );
        assert_eq!(
            ParamEvent::from_raw("bogus", Some(0.5)),
            Err(BusError::UnknownTopic("bogus".into()))
        );
    }

    #[test]
    fn state_applies_each_channel_independently() {
        let mut s = EffectParameterState::default();
        s.apply(&ParamEvent::delay(0.4));
        s.apply(&ParamEvent::PhaserChange { wet: -2.0 });
        assert_eq!(s.chorus_depth, 0.0);
        assert_eq!(s.delay_wet, 0.4);
        assert_eq!(s.phaser_wet, 0.0);
        assert_eq!(s.intensity(Topic::DelayChange), 0.4);
    }
}
