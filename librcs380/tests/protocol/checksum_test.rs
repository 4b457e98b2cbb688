use librcs380::protocol::checksum::{dcs_valid, lcs_valid};
use librcs380::protocol::{dcs, lcs};

use crate::common;

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(3), 0xfd);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(lcs(0xff), 0x01);

    assert_eq!(dcs(&[0xd6, 0x2a, 0x01]), 0xff);
    assert_eq!(dcs(&[0xd7, 0xd8, 0x01]), 0x50);
    assert_eq!(dcs(&[]), 0x00);
}

#[test]
fn fixture_frames_carry_valid_checksums() {
    for f in [
        common::set_command_type_frame(),
        common::set_command_type_response(),
        common::firmware_response(),
        common::no_card_response(),
        common::single_byte_response(),
    ] {
        let len = f[3];
        assert!(lcs_valid(len, f[4]), "lcs of {}", hex::encode(&f));
        let payload = &f[5..5 + len as usize];
        assert!(dcs_valid(payload, f[5 + len as usize]), "dcs of {}", hex::encode(&f));
    }
}
