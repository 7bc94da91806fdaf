use otp_common::bits::BitString;
use otp_common::board::BoardNames;
use otp_common::checks::{check_bootmode, check_serial};
use otp_common::codes::CodeTable;
use otp_common::fields::{
    AdvancedBootField, BootmodeField, EthClkFrequency, Field, HubTimeout, OverclockField,
    RevisionField, Unknown16Field, Unknown27Field,
};
use otp_common::format::{format_mac, pretty_bits};
use otp_common::{BoardIdentity, OtpError, RegisterStore, Region, Result};

/// Labels are right aligned to this many columns.
pub const LABEL_WIDTH: usize = 23;

/// Shown for optional regions the dump did not contain.
pub const NOT_PRESENT: &str = "not present";

/// The decoded contents of a dump, as `label : value` lines.
#[derive(Debug)]
pub struct Report {
    lines: Vec<(String, String)>,
    warnings: Vec<&'static str>,
}

impl Report {
    /// Run the consistency checks, resolve the board, and render every known field.
    ///
    /// Fails without producing anything if a required region is missing or the board identity
    /// contains a code the tables do not know.
    pub fn new(store: &RegisterStore) -> Result<Self> {
        let warnings = [check_bootmode(store)?, check_serial(store)?]
            .iter()
            .filter_map(|c| c.warning())
            .collect();
        let board = BoardIdentity::resolve(store)?;
        let names = board.names()?;

        let mut report = Report {
            lines: Vec::new(),
            warnings,
        };
        report.render(store, &names)?;
        Ok(report)
    }

    pub fn lines(&self) -> &[(String, String)] {
        &self.lines
    }

    pub fn warnings(&self) -> &[&'static str] {
        &self.warnings
    }

    fn push(&mut self, label: &str, value: impl Into<String>) {
        self.lines.push((label.to_string(), value.into()));
    }

    fn render(&mut self, store: &RegisterStore, names: &BoardNames) -> Result<()> {
        let pretty = |bits: BitString| pretty_bits(bits, true);
        let plain = |bits: BitString| bits.to_string();
        let hex = |region| optional(store.get(region), |raw| raw.hex());

        self.push("OTP Region 16 ( 0-23)", field(store, Unknown16Field::Bits0To15, pretty)?);
        self.push("OTP Region 16 (24-27)", field(store, Unknown16Field::Bits16To23, pretty)?);
        self.push("OTP Region 16 (28-31)", field(store, Unknown16Field::Bits24To31, pretty)?);

        let bootmode = store.get(Region::Bootmode)?;
        self.push("Bootmode", format!("{} {}", bootmode.hex(), bootmode.binary()));
        self.push("Bootmode - Copy", store.get(Region::BootmodeCopy)?.hex());
        self.push("OSC Frequency 19.2MHz", field(store, BootmodeField::Bit1, plain)?);
        self.push("SDIO Pullup Enabled", field(store, BootmodeField::Bit3, plain)?);
        self.push("GPIO Bootmode", field(store, BootmodeField::Bit19, plain)?);
        self.push("GPIO Bootmode Bank", field(store, BootmodeField::Bit20, plain)?);
        self.push("SD Boot Enabled", field(store, BootmodeField::Bit21, plain)?);
        self.push("Boot Bank", field(store, BootmodeField::Bit22, plain)?);
        self.push(
            "OTP Region 17 (25)",
            format!(
                "{} (This is Unknown but set on the CM3)",
                field(store, BootmodeField::Bit25, plain)?
            ),
        );
        self.push("USB Device Boot Enabled", field(store, BootmodeField::Bit28, plain)?);
        self.push("USB Host Boot Enabled", field(store, BootmodeField::Bit29, plain)?);

        self.push("OTP Region 27 ( 0-15)", field(store, Unknown27Field::Bits0To15, pretty)?);
        self.push("OTP Region 27 (16-31)", field(store, Unknown27Field::Bits16To31, pretty)?);

        self.push("Serial Number", store.get(Region::SerialNumber)?.hex());
        self.push("Inverse Serial Number", store.get(Region::SerialNumberInverted)?.hex());
        self.push("Revision Number", store.get(Region::RevisionNumber)?.hex());
        self.push("New Revision Flag", field(store, RevisionField::NewFlag, plain)?);
        self.push("RAM", format!("{} MB", names.memory_size.name()));
        self.push("Manufacturer", names.manufacturer.name());
        self.push("CPU", names.processor.name());
        self.push(
            "Board Type",
            format!("Raspberry Pi Model {}", names.board_type.name()),
        );
        self.push("Board Revision", names.board_revision.name());
        self.push("Batch Number", hex(Region::BatchNumber)?);
        self.push(
            "Overvolt Protection Bit",
            field(store, OverclockField::OvervoltProtection, plain)?,
        );

        for (label, region) in [
            ("Customer Region One", Region::CustomerOne),
            ("Customer Region Two", Region::CustomerTwo),
            ("Customer Region Three", Region::CustomerThree),
            ("Customer Region Four", Region::CustomerFour),
            ("Customer Region Five", Region::CustomerFive),
            ("Customer Region Six", Region::CustomerSix),
            ("Customer Region Seven", Region::CustomerSeven),
            ("Customer Region Eight", Region::CustomerEight),
            ("Codec License Key One", Region::CodecKeyOne),
            ("Codec License Key Two", Region::CodecKeyTwo),
        ] {
            self.push(label, hex(region)?);
        }

        let mac = match (
            store.get(Region::MacAddressOne),
            store.get(Region::MacAddressTwo),
        ) {
            (Ok(one), Ok(two)) => format_mac(one, two),
            (Err(OtpError::MissingRegion { .. }), _) | (_, Err(OtpError::MissingRegion { .. })) => {
                NOT_PRESENT.to_string()
            }
            (Err(e), _) | (_, Err(e)) => return Err(e),
        };
        self.push("MAC Address", mac);

        self.push(
            "Advanced Boot",
            optional(store.get(Region::AdvancedBoot), |raw| {
                format!("{} {}", raw.hex(), raw.binary())
            })?,
        );
        let pin = |bits: BitString| pretty_bits(bits, false);
        self.push("ETH_CLK Output Pin", field(store, AdvancedBootField::Bits0To6, pin)?);
        self.push("ETH_CLK Output Enabled", field(store, AdvancedBootField::Bit7, plain)?);
        self.push("LAN_RUN Output Pin", field(store, AdvancedBootField::Bits8To14, pin)?);
        self.push("LAN_RUN Output Enabled", field(store, AdvancedBootField::Bit15, plain)?);
        self.push(
            "USB Hub Timeout",
            field(store, AdvancedBootField::Bit24, |bit| {
                HubTimeout::from_bit(bit.value() == 1).to_string()
            })?,
        );
        self.push(
            "ETH_CLK Frequency",
            field(store, AdvancedBootField::Bit25, |bit| {
                EthClkFrequency::from_bit(bit.value() == 1).to_string()
            })?,
        );
        Ok(())
    }
}

/// Every loaded region in all renderings.
#[derive(Debug)]
pub struct RegionTable {
    lines: Vec<(String, String)>,
}

impl RegionTable {
    pub fn new(store: &RegisterStore) -> Self {
        let lines = store
            .iter()
            .map(|(index, raw)| {
                let name = Region::try_from(index).map_or("-", Region::name);
                (
                    format!("{index:02} {name}"),
                    format!(
                        "{:>10} {} {} {}",
                        raw.decimal(),
                        raw.hex(),
                        raw.octal(),
                        raw.binary()
                    ),
                )
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[(String, String)] {
        &self.lines
    }
}

/// Render a value, or [`NOT_PRESENT`] if its region is missing from the dump.
fn optional<T>(value: Result<T>, render: impl FnOnce(T) -> String) -> Result<String> {
    match value {
        Ok(v) => Ok(render(v)),
        Err(OtpError::MissingRegion { region }) => {
            tracing::debug!("region {region} not in dump");
            Ok(NOT_PRESENT.to_string())
        }
        Err(e) => Err(e),
    }
}

fn field<F: Field>(
    store: &RegisterStore,
    field: F,
    render: impl FnOnce(BitString) -> String,
) -> Result<String> {
    optional(store.field(field), render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use otp_common::ErrorKind;

    /// A Raspberry Pi 3B.
    const PI_3B: &str = "\
08:00000000
09:00000000
10:00000000
11:00000000
12:00000000
13:00000000
14:00000000
15:00000000
16:00280000
17:1020000a
18:1020000a
19:ffffffff
20:ffffffff
21:ffffffff
22:ffffffff
23:ffffffff
24:ffffffff
25:ffffffff
26:ffffffff
27:00001f1f
28:8e2b5e71
29:71d4a18e
30:00a02082
31:c3d5e2ea
32:00000000
33:00000000
34:00000000
35:00000000
36:00000000
37:00000000
38:00000000
39:00000000
40:00000000
41:00000000
42:00000000
43:00000000
44:00000000
45:00000000
46:00000000
47:00000000
48:00000000
49:00000000
50:00000000
51:00000000
52:00000000
53:00000000
54:00000000
55:00000000
56:00000000
57:00000000
58:00000000
59:00000000
60:00000000
61:00000000
62:00000000
63:00000000
64:34560000
65:b827eb12
66:02009faa
";

    trait Lookup {
        fn get(&self, label: &str) -> Option<&str>;
    }

    impl Lookup for Report {
        fn get(&self, label: &str) -> Option<&str> {
            self.lines()
                .iter()
                .find(|(l, _)| l == label)
                .map(|(_, v)| v.as_str())
        }
    }

    fn report(dump: &str) -> Result<Report> {
        Report::new(&RegisterStore::parse(dump).expect("valid dump"))
    }

    fn with_line(dump: &str, index: &str, value: &str) -> String {
        dump.lines()
            .map(|l| {
                if l.starts_with(index) {
                    format!("{index}:{value}")
                } else {
                    l.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn without_line(dump: &str, index: &str) -> String {
        dump.lines()
            .filter(|l| !l.starts_with(index))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_pi_3b() {
        let report = report(PI_3B).expect("dump decodes");
        assert!(report.warnings().is_empty());
        let expected = [
            ("OTP Region 16 ( 0-23)", "0 (0x0) 0000000000000000"),
            ("OTP Region 16 (24-27)", "40 (0x28) 00101000"),
            ("OTP Region 16 (28-31)", "0 (0x0) 00000000"),
            ("Bootmode", "0x1020000a 00010000001000000000000000001010"),
            ("Bootmode - Copy", "0x1020000a"),
            ("OSC Frequency 19.2MHz", "1"),
            ("SDIO Pullup Enabled", "1"),
            ("SD Boot Enabled", "1"),
            ("OTP Region 17 (25)", "0 (This is Unknown but set on the CM3)"),
            ("USB Device Boot Enabled", "1"),
            ("USB Host Boot Enabled", "0"),
            ("OTP Region 27 ( 0-15)", "7967 (0x1f1f) 0001111100011111"),
            ("Serial Number", "0x8e2b5e71"),
            ("Inverse Serial Number", "0x71d4a18e"),
            ("Revision Number", "0x00a02082"),
            ("New Revision Flag", "1"),
            ("RAM", "1024 MB"),
            ("Manufacturer", "Sony UK"),
            ("CPU", "BCM2837"),
            ("Board Type", "Raspberry Pi Model 3B"),
            ("Board Revision", "1.2"),
            ("Batch Number", "0xc3d5e2ea"),
            ("Customer Region One", "0x00000000"),
            ("MAC Address", "b8:27:eb:12:34:56"),
        ];
        for (label, value) in expected {
            assert_eq!(report.get(label), Some(value), "{label}");
        }
        assert_eq!(report.lines().len(), 45);
        assert_eq!(report.lines().last().map(|(l, _)| l.as_str()), Some("ETH_CLK Frequency"));
    }

    #[test]
    fn test_advanced_boot() {
        // 0x02009faa: bit_25 set, LAN_RUN pin 31 enabled, ETH_CLK pin 42 enabled
        let report = report(PI_3B).expect("dump decodes");
        assert_eq!(report.get("ETH_CLK Output Pin"), Some("42 (0x2a)"));
        assert_eq!(report.get("ETH_CLK Output Enabled"), Some("1"));
        assert_eq!(report.get("LAN_RUN Output Pin"), Some("31 (0x1f)"));
        assert_eq!(report.get("LAN_RUN Output Enabled"), Some("1"));
        assert_eq!(report.get("USB Hub Timeout"), Some("2 Seconds"));
        assert_eq!(report.get("ETH_CLK Frequency"), Some("24MHz"));
    }

    #[test]
    fn test_warnings_do_not_stop_decoding() {
        let dump = with_line(PI_3B, "18", "0020000a");
        let dump = with_line(&dump, "29", "71d4a18f");
        let report = report(&dump).expect("dump still decodes");
        assert_eq!(
            report.warnings(),
            &["Bootmode fields are not the same", "Serial failed checksum"]
        );
        assert_eq!(report.get("Board Type"), Some("Raspberry Pi Model 3B"));
    }

    #[test]
    fn test_optional_regions() {
        let dump = without_line(&without_line(PI_3B, "66"), "65");
        let dump = without_line(&dump, "31");
        let report = report(&dump).expect("optional regions may be missing");
        assert_eq!(report.get("Advanced Boot"), Some(NOT_PRESENT));
        assert_eq!(report.get("USB Hub Timeout"), Some(NOT_PRESENT));
        assert_eq!(report.get("MAC Address"), Some(NOT_PRESENT));
        assert_eq!(report.get("Batch Number"), Some(NOT_PRESENT));
    }

    #[test]
    fn test_no_mac() {
        let report = report(&with_line(PI_3B, "65", "00000000")).expect("dump decodes");
        assert_eq!(report.get("MAC Address"), Some("None"));
    }

    #[test]
    fn test_required_regions() {
        for index in ["17", "18", "28", "29", "30"] {
            let err = report(&without_line(PI_3B, index)).expect_err(index);
            assert_eq!(err.kind(), ErrorKind::MissingRegion, "{index}");
        }
    }

    #[test]
    fn test_unknown_board_type_is_fatal() {
        // a Pi 4B; board type 0x11 is not in the table
        let err = report(&with_line(PI_3B, "30", "00c03111")).expect_err("unknown board type");
        assert_eq!(err.kind(), ErrorKind::UnknownCode);
    }

    #[test]
    fn test_legacy_board() {
        let report = report(&with_line(PI_3B, "30", "0000000e")).expect("dump decodes");
        assert_eq!(report.get("New Revision Flag"), Some("0"));
        assert_eq!(report.get("RAM"), Some("512 MB"));
        assert_eq!(report.get("Board Type"), Some("Raspberry Pi Model B"));
        assert_eq!(report.get("Board Revision"), Some("2.0"));
    }

    #[test]
    fn test_labels_fit() {
        let report = report(PI_3B).expect("dump decodes");
        for (label, _) in report.lines() {
            assert!(label.len() <= LABEL_WIDTH, "{label} is too long");
        }
    }

    #[test]
    fn test_region_table() {
        let store = RegisterStore::parse(PI_3B).expect("valid dump");
        let table = RegionTable::new(&store);
        assert_eq!(table.lines().len(), 59);
        let (label, value) = &table.lines()[22];
        assert_eq!(label, "30 revision_number");
        assert_eq!(
            value,
            "  10494082 0x00a02082 0o0000000050020202 00000000101000000010000010000010"
        );
    }
}
