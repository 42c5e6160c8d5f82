mod common;

use common::{ad_types, init_logger, standard_encoder, DEVICE_NAME};
use nfc_oob_advdata::validator::UnsupportedField;
use nfc_oob_advdata::{AdvertisingDataSpec, Error, InvalidParameter, LescOobData, OobAdvDataEncoder};
use nfc_oob_gap::advdata::NameMode;
use nfc_oob_gap::assigned::flags::{FlagLabel, Flags};
use nfc_oob_gap::assigned::le_role::{InvalidRole, RequestedRole};
use nfc_oob_gap::assigned::sc_confirm_value::ScConfirmValue;
use nfc_oob_gap::assigned::sc_random_value::ScRandomValue;
use nfc_oob_gap::assigned::security_manager_oob_flags::SecurityManagerOobFlags;
use nfc_oob_gap::assigned::security_manager_tk_value::SecurityManagerTkValue;

fn full_spec() -> AdvertisingDataSpec {
    let mut spec = AdvertisingDataSpec {
        oob_flags: Some(SecurityManagerOobFlags::from(0x03)),
        tk_value: Some(SecurityManagerTkValue::new([0x5A; 16])),
        lesc_data: Some(LescOobData::new(ScConfirmValue::new([0xC0; 16]), ScRandomValue::new([0xD0; 16]))),
        le_role: Some(RequestedRole::PERIPHERAL_PREFERRED),
        ..Default::default()
    };

    let mut flags = Flags::new();

    flags.enable(FlagLabel::LeGeneralDiscoverableMode);

    spec.standard.include_le_address = true;
    spec.standard.include_appearance = true;
    spec.standard.flags = flags;
    spec.standard.name = NameMode::Full;
    spec.standard.service_uuids_16.add(0x180A);
    spec.standard.service_uuids_128.add(0xF000_AA00_0451_4000_B000_0000_0000_0000);

    spec
}

#[test]
fn oob_flags_example() {
    init_logger();

    let spec = AdvertisingDataSpec {
        oob_flags: Some(SecurityManagerOobFlags::from(0x05)),
        ..Default::default()
    };

    let mut encoder = OobAdvDataEncoder::new(standard_encoder());

    assert_eq!(Ok(3), encoder.required_len(&spec));

    let mut data = [0u8; 3];

    assert_eq!(Ok(3), encoder.encode(&spec, Some(&mut data[..])));
    assert_eq!([0x02, 0x11, 0x05], data);

    let mut small = [0u8; 2];

    assert_eq!(
        Err(Error::DataSizeExceeded {
            required: 3,
            remaining: 2
        }),
        encoder.encode(&spec, Some(&mut small[..]))
    );
}

#[test]
fn fields_are_in_a_fixed_order() {
    init_logger();

    let mut encoder = OobAdvDataEncoder::new(standard_encoder());

    let data = encoder.encode_to_vec(&full_spec()).unwrap();

    assert_eq!(
        vec![0x11, 0x22, 0x23, 0x10, 0x1C, 0x1B, 0x19, 0x01, 0x09, 0x03, 0x07],
        ad_types(&data)
    );
}

#[test]
fn role_follows_oob_flags() {
    init_logger();

    let spec = AdvertisingDataSpec {
        le_role: Some(RequestedRole::ONLY_CENTRAL),
        oob_flags: Some(SecurityManagerOobFlags::from(0x01)),
        ..Default::default()
    };

    let mut encoder = OobAdvDataEncoder::new(standard_encoder());

    let data = encoder.encode_to_vec(&spec).unwrap();

    assert_eq!(vec![0x02, 0x11, 0x01, 0x02, 0x1C, 0x01], data);
}

#[test]
fn standard_fields_content() {
    init_logger();

    let mut spec = AdvertisingDataSpec::default();

    spec.standard.name = NameMode::Short(3);
    spec.standard.include_le_address = true;

    let mut encoder = OobAdvDataEncoder::new(standard_encoder());

    let data = encoder.encode_to_vec(&spec).unwrap();

    assert_eq!(
        vec![
            0x08, 0x1B, 0xC1, 0xB2, 0xA3, 0x94, 0x85, 0xF6, 0x01, // random address
            0x04, 0x08, b'O', b'O', b'B', // shortened name
        ],
        data
    );

    // a short name longer than the name is the complete name
    spec.standard.name = NameMode::Short(200);

    let data = encoder.encode_to_vec(&spec).unwrap();

    assert_eq!(0x09, data[10]);
    assert_eq!(DEVICE_NAME.as_bytes(), &data[11..]);
}

#[test]
fn exact_capacity_and_one_short() {
    init_logger();

    let spec = full_spec();

    let mut encoder = OobAdvDataEncoder::new(standard_encoder());

    let size = encoder.required_len(&spec).unwrap();

    let mut short = vec![0u8; size - 1];

    assert!(matches!(
        encoder.encode(&spec, Some(&mut short[..])),
        Err(Error::DataSizeExceeded { .. })
    ));

    assert!(encoder.registry().is_empty());

    let mut exact = vec![0u8; size];

    assert_eq!(Ok(size), encoder.encode(&spec, Some(&mut exact[..])));

    // `ad_types` checks that the last structure ends at the last byte
    assert_eq!(11, ad_types(&exact).len());
}

#[test]
fn larger_buffer_is_allowed() {
    init_logger();

    let spec = AdvertisingDataSpec {
        le_role: Some(RequestedRole::CENTRAL_PREFERRED),
        ..Default::default()
    };

    let mut encoder = OobAdvDataEncoder::new(standard_encoder());

    let mut data = [0xFFu8; 10];

    assert_eq!(Ok(3), encoder.encode(&spec, Some(&mut data[..])));
    assert_eq!([0x02, 0x1C, 0x03, 0xFF], data[..4]);
}

#[test]
fn unsupported_field_writes_nothing() {
    init_logger();

    let mut spec = full_spec();

    spec.tx_power_level = Some(-4);

    let mut encoder = OobAdvDataEncoder::new(standard_encoder());

    let expected = Err(Error::InvalidParameter(InvalidParameter::Unsupported(
        UnsupportedField::TxPowerLevel,
    )));

    assert_eq!(expected, encoder.required_len(&spec));

    let mut data = [0u8; 255];

    assert_eq!(expected, encoder.encode(&spec, Some(&mut data[..])));

    assert!(data.iter().all(|b| *b == 0));
    assert!(encoder.registry().is_empty());
}

#[test]
fn invalid_role_is_rejected_when_writing() {
    init_logger();

    let spec = AdvertisingDataSpec {
        oob_flags: Some(SecurityManagerOobFlags::from(0x05)),
        le_role: Some(RequestedRole(0xEE)),
        ..Default::default()
    };

    let mut encoder = OobAdvDataEncoder::new(standard_encoder());

    // measuring only counts the size of the role structure
    assert_eq!(Ok(6), encoder.required_len(&spec));
    assert_eq!(Ok(6), encoder.encode(&spec, None));

    let mut data = [0u8; 8];

    assert_eq!(
        Err(Error::InvalidParameter(InvalidParameter::LeRole(InvalidRole(0xEE)))),
        encoder.encode(&spec, Some(&mut data[..]))
    );

    // the OOB flags before the role were written, nothing after them
    assert_eq!([0x02, 0x11, 0x05, 0, 0, 0, 0, 0], data);
}

#[test]
fn empty_spec() {
    init_logger();

    let mut encoder = OobAdvDataEncoder::new(standard_encoder());

    assert_eq!(Ok(Vec::new()), encoder.encode_to_vec(&AdvertisingDataSpec::default()));
}
