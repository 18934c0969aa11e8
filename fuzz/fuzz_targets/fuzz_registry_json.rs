#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(registry) = fatturapa::assemble::TaxRegistry::from_json(s) {
            for category in &registry.categories {
                let _ = registry.withholding_type_code(&category.code);
                for rate in &category.rates {
                    let _ = registry.payment_reason_code(&category.code, Some(&rate.key));
                }
            }
        }
    }
});
