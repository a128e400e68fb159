use std::thread;

use sn76489_psg::{
    ByteSink, Channel, CommandFlags, NoiseCtrl, NoiseType, Psg, PsgConfig, PsgError, SharedSink,
};

/// Latch/data register model of the receiving chip
#[derive(Default)]
struct ChipModel {
    tone: [u16; 3],
    attenuation: [u8; 4],
    noise: u8,
    latched: u8,
}

impl ByteSink for ChipModel {
    type Error = std::convert::Infallible;

    fn send(&mut self, byte: u8) -> Result<(), Self::Error> {
        let flags = CommandFlags::from_byte(byte);
        if flags.is_latch() {
            let channel = (byte >> 5) & 0x03;
            self.latched = channel;
            if flags.is_volume() {
                self.attenuation[channel as usize] = byte & 0x0F;
            } else if channel == 3 {
                self.noise = byte & 0x07;
            } else {
                let ch = channel as usize;
                self.tone[ch] = (self.tone[ch] & 0x3F0) | (byte & 0x0F) as u16;
            }
        } else if self.latched < 3 {
            let ch = self.latched as usize;
            self.tone[ch] = (self.tone[ch] & 0x00F) | (((byte & 0x3F) as u16) << 4);
        }
        Ok(())
    }
}

#[test]
fn chip_registers_follow_commands() {
    let mut psg = Psg::new(ChipModel::default());

    psg.set_tone(Channel::Ch1, 440).unwrap();
    psg.set_tone(Channel::Ch2, 110).unwrap();
    psg.set_tone_period(Channel::Ch3, 0x2A5).unwrap();
    psg.set_volume(Channel::Ch1, 15).unwrap();
    psg.set_volume(Channel::Ch2, 8).unwrap();
    psg.set_volume(Channel::Ch4, 0).unwrap();
    psg.set_noise(NoiseType::White, NoiseCtrl::Ch3).unwrap();

    let chip = psg.into_inner();
    assert_eq!(chip.tone, [142, 568, 0x2A5]);
    assert_eq!(chip.attenuation, [0, 7, 0, 15]);
    assert_eq!(chip.noise, 0b111);
}

#[test]
fn tone_rewrite_replaces_both_halves() {
    let mut psg = Psg::new(ChipModel::default());
    psg.set_tone_period(Channel::Ch1, 0x3FF).unwrap();
    psg.set_tone_period(Channel::Ch1, 0x010).unwrap();
    assert_eq!(psg.sink().tone[0], 0x010);
}

#[test]
fn rejected_commands_send_nothing() {
    let mut psg = Psg::new(Vec::<u8>::new());
    assert_eq!(
        psg.set_volume(Channel::Ch3, 200),
        Err(PsgError::InvalidLevel(200))
    );
    assert_eq!(psg.set_tone(Channel::Ch3, 0), Err(PsgError::ZeroFrequency));
    assert!(matches!(
        psg.set_tone(Channel::Ch3, 20),
        Err(PsgError::PeriodOutOfRange {
            frequency: 20,
            period: 3125
        })
    ));
    assert!(psg.sink().is_empty());
}

#[test]
fn error_messages() {
    let err: PsgError = PsgError::InvalidLevel(16);
    assert_eq!(err.to_string(), "Invalid volume level 16 (expected 0-15)");
    let err: PsgError<&str> = PsgError::Sink("bus timeout");
    assert_eq!(err.to_string(), "Byte sink error: bus timeout");
}

#[test]
fn shared_bus_keeps_tone_bytes_together() {
    let bus = SharedSink::new(Vec::<u8>::new());

    let workers: Vec<_> = [Channel::Ch1, Channel::Ch2, Channel::Ch3]
        .into_iter()
        .map(|channel| {
            let mut psg = Psg::new(bus.clone());
            thread::spawn(move || {
                for frequency in 100..400 {
                    psg.set_tone(channel, frequency).unwrap();
                    psg.set_volume(channel, (frequency % 16) as u8).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let bytes = bus.lock().clone();
    assert_eq!(bytes.len(), 3 * 300 * 3);

    let mut iter = bytes.iter().copied();
    while let Some(byte) = iter.next() {
        let flags = CommandFlags::from_byte(byte);
        assert!(flags.is_latch(), "data byte {byte:#04X} without a latch");
        if !flags.is_volume() {
            let data = iter.next().expect("tone latch at end of stream");
            assert!(!CommandFlags::from_byte(data).is_latch());
        }
    }
}

#[test]
fn config_from_json() {
    let config: PsgConfig = serde_json::from_str(r#"{ "master_clock": 4000000 }"#).unwrap();
    assert_eq!(config.tone_divisor(), 125_000);

    let defaults: PsgConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, PsgConfig::default());

    let psg = Psg::with_config(Vec::<u8>::new(), config);
    assert_eq!(psg.tone_period(440), Ok(284));
}
