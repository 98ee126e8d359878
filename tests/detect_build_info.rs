use devsift::DetectionStatus;

mod common;
use common::{IPHONE_3_UA, RuleStoreFixture, detector_for, headers};

#[test]
fn test_windows_phone_with_generic_platform() {
    let store = RuleStoreFixture::new();
    let detector = detector_for(store.path());

    let detection = detector
        .detect_from_build_info(&headers(&[
            ("devicemanufacturer", "NOKIA"),
            ("devicename", "RM-875"),
        ]))
        .unwrap();

    assert_eq!(detection.status, DetectionStatus::Ok);
    assert!(detection.rule_key.is_none());
    let specs = detection.specs.unwrap();
    assert_eq!(specs.vendor, "Nokia");
    assert_eq!(specs.model, "Lumia 1020");
    assert_eq!(specs.platform, "Windows Phone");
    // Same platform name and no version on the extra: the device keeps its own.
    assert_eq!(specs.platform_version, "8.0");
}

#[test]
fn test_android_device_and_platform() {
    let store = RuleStoreFixture::new();
    let detector = detector_for(store.path());

    let detection = detector
        .detect_from_build_info(&headers(&[
            ("ro.product.brand", "samsung"),
            ("ro.product.model", "GT-I9300"),
            ("ro.build.id", "JZO54K"),
            ("ro.build.version.release", "4.1.2"),
        ]))
        .unwrap();

    let specs = detection.specs.unwrap();
    assert_eq!(specs.model, "GT-I9300");
    assert_eq!(specs.platform, "Android");
    assert_eq!(specs.platform_version, "4.1.2");
}

#[test]
fn test_android_manufacturer_tuple() {
    let store = RuleStoreFixture::new();
    let detector = detector_for(store.path());

    // No brand key, so the manufacturer tuple is the one that composes.
    let detection = detector
        .detect_from_build_info(&headers(&[
            ("ro.product.manufacturer", "Samsung"),
            ("ro.product.model", "GT-I9300"),
        ]))
        .unwrap();

    let specs = detection.specs.unwrap();
    assert_eq!(specs.model, "GT-I9300");
    assert_eq!(specs.platform_version, "4.0.4");
}

#[test]
fn test_unknown_android_falls_back_to_generic() {
    let store = RuleStoreFixture::new();
    let detector = detector_for(store.path());

    let detection = detector
        .detect_from_build_info(&headers(&[
            ("ro.product.brand", "Obscure"),
            ("ro.product.model", "X9"),
        ]))
        .unwrap();

    let specs = detection.specs.unwrap();
    assert_eq!(specs.vendor, "Generic");
    assert_eq!(specs.model, "Android");
}

#[test]
fn test_unknown_build_info_is_not_found() {
    let store = RuleStoreFixture::new();
    let detector = detector_for(store.path());

    let detection = detector
        .detect_from_build_info(&headers(&[("some.key", "value")]))
        .unwrap();
    assert_eq!(detection.status, DetectionStatus::NotFound);

    let empty = detector.detect_from_build_info(&headers(&[])).unwrap();
    assert_eq!(empty.status, DetectionStatus::NotFound);
}

#[test]
fn test_auto_routing_to_build_info() {
    let store = RuleStoreFixture::new();
    let detector = detector_for(store.path());

    let detection = detector
        .detect(&headers(&[
            ("DeviceManufacturer", "NOKIA"),
            ("DeviceName", "RM-875"),
        ]))
        .unwrap();
    assert_eq!(detection.specs.unwrap().model, "Lumia 1020");
}

#[test]
fn test_agent_header_disables_build_info_routing() {
    let store = RuleStoreFixture::new();
    let detector = detector_for(store.path());

    let detection = detector
        .detect(&headers(&[
            ("devicemanufacturer", "NOKIA"),
            ("devicename", "RM-875"),
            ("user-agent", "curl/7.64.1"),
        ]))
        .unwrap();
    assert!(!detection.is_found());
}

#[test]
fn test_helper_not_useful_for_build_info() {
    let store = RuleStoreFixture::new();
    let detector = detector_for(store.path());

    // The x- header alone would hit a shared rule, but build info keys route
    // the input away from header matching.
    let input = headers(&[
        ("devicemanufacturer", "NOKIA"),
        ("devicename", "RM-875"),
        ("x-device-ua", IPHONE_3_UA),
    ]);
    assert_eq!(detector.detect(&input).unwrap().specs.unwrap().model, "Lumia 1020");
    assert!(!detector.is_helper_useful(&input).unwrap());

    let headers_only = headers(&[("x-device-ua", IPHONE_3_UA)]);
    assert!(detector.is_helper_useful(&headers_only).unwrap());
}
