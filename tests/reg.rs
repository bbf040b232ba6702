use proptest::prelude::*;
use ral_model::group_def;
use ral_model::prelude::*;

fn delta() -> Group {
    group_def! {
        group DeltaX @ 0x2003_0000 stride 0x1000 * 2 {
            register Apple @ 0x00 rw {
                field Dp @ 0, 1;
                field Hdmi @ 2, 4;
                field Usb @ 15, 16;
            }
            register Banana @ 0x20 rw {
                field Hdcp @ 0, 10;
                field Aes @ 20, 5;
            }
        }
    }
    .build()
    .unwrap()
}

fn covered_bits(register: &Register) -> u64 {
    register
        .fields()
        .iter()
        .fold(0, |mask, field| mask | (field.mask() << field.position()))
}

#[test]
fn value_packs_fields() {
    let mut delta = delta();
    let apple = delta.register_mut("Apple").unwrap();
    apple.field_mut("Dp").unwrap().set(0x1);
    apple.field_mut("Usb").unwrap().set(0x6);
    assert_eq!(apple.value(), 0x30001);
}

#[test]
fn set_value_unpacks_into_fields() {
    let mut delta = delta();
    let banana = delta.register_mut("Banana").unwrap();
    banana.set_value(0x20002);
    assert_eq!(banana.field("Hdcp").unwrap().get(), 0x2);
    assert_eq!(banana.field("Aes").unwrap().get(), 0x0);
}

#[test]
fn uncovered_bits_read_zero() {
    let mut delta = delta();
    let apple = delta.register_mut("Apple").unwrap();
    let covered = covered_bits(apple);
    apple.set_value(0x1234_5678);
    assert_eq!(apple.value(), 0x1234_5678 & covered);
}

#[test]
fn direct_field_write_is_visible_through_value() {
    let mut delta = delta();
    let apple = delta.register_mut("Apple").unwrap();
    apple.field_mut("Hdmi").unwrap().set(0x5);
    assert_eq!(apple.value(), 0x5 << 2);
}

#[test]
fn fields_sorted_by_position() {
    // Declaration order is scrambled on purpose.
    let group = group_def! {
        group G @ 0x0 {
            register R @ 0x00 rw {
                field High @ 20, 5;
                field Low @ 0, 10;
                field Mid @ 12, 3;
            }
        }
    }
    .build()
    .unwrap();
    let names: Vec<_> = group.register("R").unwrap().fields().iter().map(Field::name).collect();
    assert_eq!(names, ["Low", "Mid", "High"]);
}

#[test]
fn access_is_metadata_only() {
    let mut group = group_def! {
        group G @ 0x0 {
            register Status @ 0x00 ro { field Ready @ 0, 1; }
            register Command @ 0x04 wo { field Start @ 0, 1; }
        }
    }
    .build()
    .unwrap();
    let status = group.register("Status").unwrap();
    assert_eq!(status.access(), Access::ReadOnly);
    assert!(status.access().is_readable());
    assert!(!status.access().is_writable());
    assert_eq!(group.register("Command").unwrap().access(), Access::WriteOnly);
    // The model never enforces the access mode.
    let status = group.register_mut("Status").unwrap();
    status.set_value(0x1);
    assert_eq!(status.value(), 0x1);
}

#[test]
fn metadata_accessors() {
    let delta = delta();
    let banana = delta.register("Banana").unwrap();
    assert_eq!(banana.name(), "Banana");
    assert_eq!(banana.address(), 0x2003_0020);
    assert_eq!(banana.to_string(), "Banana");
}

proptest! {
    #[test]
    fn masked_round_trip(raw in any::<u64>()) {
        let mut delta = delta();
        let apple = delta.register_mut("Apple").unwrap();
        let covered = covered_bits(apple);
        apple.set_value(raw);
        prop_assert_eq!(apple.value(), raw & covered);
        let manual = apple
            .fields()
            .iter()
            .fold(0, |acc, field| acc | (field.get() << field.position()));
        prop_assert_eq!(apple.value(), manual);
    }
}
