#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{RuleStoreFixture, detector_for, headers};

pub const IPHONE_4_UA: &str = "Mozilla/5.0 (iPhone; U; CPU iPhone OS 4_3 like Mac OS X; en-gb) \
                               AppleWebKit/533.17.9 (KHTML, like Gecko) Version/5.0.2 \
                               Mobile/8F190 Safari/6533.18.5";

pub const IPHONE_3_UA: &str = "Mozilla/5.0 (iPhone; U; CPU iPhone OS 3_1_2 like Mac OS X; en-us) \
                               AppleWebKit/528.18 (KHTML, like Gecko) Version/4.0 \
                               Mobile/7D11 Safari/528.16";

pub const OPERA_MINI_UA: &str = "Opera/9.80 (J2ME/MIDP; Opera Mini/5.0.18741/18.794; U; en) \
                                 Presto/2.4.15";
