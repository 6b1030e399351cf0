#![no_main]

use libfuzzer_sys::fuzz_target;

use fuelbud_core::trip::{TripInput, FILL_ALL_FIELDS};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut fields = text.splitn(3, '\n');
    let input = TripInput::new(
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
    );

    match input.validate() {
        Ok(trip) => {
            assert!(trip.distance.is_finite());
            assert!(trip.fuel_used.is_finite());
            assert!(trip.fuel_price.is_finite());
        }
        Err(err) => assert_eq!(err.user_message(), FILL_ALL_FIELDS),
    }
});
