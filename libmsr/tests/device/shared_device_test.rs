use std::thread;

use libmsr::device::{DeviceBuilder, SharedDevice};
use libmsr::types::Led;

use crate::common::mock_with_replies;

#[test]
fn shared_device_serialises_transactions() {
    let replies = (0..8).map(|_| b"y".to_vec()).collect();
    let dev = DeviceBuilder::new()
        .with_transport(Box::new(mock_with_replies(replies)))
        .build()
        .unwrap();
    let shared = SharedDevice::from(dev);

    let workers: Vec<_> = (0..8)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                shared
                    .with(|d| {
                        d.set_leds(Led::Green)?;
                        d.test_communication()
                    })
                    .unwrap()
            })
        })
        .collect();

    for w in workers {
        assert!(w.join().unwrap());
    }
}
