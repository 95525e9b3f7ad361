//! Sound effect routing
//!
//! The core decides *which* effect a collision triggers; playback itself is a
//! host concern reached through the [`SoundBank`] seam.

/// Sound effect types, in host sound-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Block destroyed
    BlockDestroyed,
    /// Ball hits paddle
    PaddleHit,
    /// Ball bounces off a wall
    WallBounce,
}

impl SoundEffect {
    /// Index into the host's sound table.
    ///
    /// The table carries exactly these three entries; an out-of-range index
    /// cannot be produced.
    pub fn index(self) -> usize {
        match self {
            SoundEffect::BlockDestroyed => 0,
            SoundEffect::PaddleHit => 1,
            SoundEffect::WallBounce => 2,
        }
    }
}

/// Host playback seam: plays an effect from its sound table.
pub trait SoundBank {
    fn play(&mut self, effect: SoundEffect);
}

/// Mute gate in front of an inner sound bank.
#[derive(Debug)]
pub struct SoundRouter<B> {
    inner: B,
    muted: bool,
}

impl<B: SoundBank> SoundRouter<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            muted: false,
        }
    }

    /// Mute/unmute all playback
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl<B: SoundBank> SoundBank for SoundRouter<B> {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        self.inner.play(effect);
    }
}

/// Sound bank for headless hosts: logs the request instead of playing it.
#[derive(Debug, Default)]
pub struct LogSoundBank;

impl SoundBank for LogSoundBank {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx[{}] {:?}", effect.index(), effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<SoundEffect>);

    impl SoundBank for Recorder {
        fn play(&mut self, effect: SoundEffect) {
            self.0.push(effect);
        }
    }

    #[test]
    fn test_sound_table_indices() {
        assert_eq!(SoundEffect::BlockDestroyed.index(), 0);
        assert_eq!(SoundEffect::PaddleHit.index(), 1);
        assert_eq!(SoundEffect::WallBounce.index(), 2);
    }

    #[test]
    fn test_router_mute_gate() {
        let mut router = SoundRouter::new(Recorder::default());
        router.play(SoundEffect::WallBounce);
        router.set_muted(true);
        router.play(SoundEffect::PaddleHit);
        router.set_muted(false);
        router.play(SoundEffect::BlockDestroyed);

        assert_eq!(
            router.inner.0,
            vec![SoundEffect::WallBounce, SoundEffect::BlockDestroyed]
        );
    }
}
