use bridge_stream::{Result, Stream, StreamSerializer};

fn hex_of(stream: &Stream) -> String {
    format!("0x{}", hex::encode(stream.encode()))
}

#[test]
fn snapshot_int() {
    let mut s = Stream::new();
    s.write_int(1231);
    s.write_int(-2);
    assert_eq!(hex_of(&s), "0xcf040000feffffff");
}

#[test]
fn snapshot_float_and_bool() {
    let mut s = Stream::new();
    s.write_float(1.0);
    s.write_float(0.5);
    s.write_bool(true);
    s.write_bool(false);
    assert_eq!(hex_of(&s), "0x0000803f0000003f0100");
}

#[test]
fn snapshot_string_and_bytes() {
    let mut s = Stream::new();
    s.write_string("1231").unwrap();
    s.write_bytes(&[0xaa, 0xbb]).unwrap();
    s.write_string("").unwrap();
    assert_eq!(hex_of(&s), "0x0400000031323331".to_owned() + "02000000aabb" + "00000000");
}

#[test]
fn snapshot_arrays() {
    let mut s = Stream::new();
    s.write_int_array(&[123, 456]).unwrap();
    s.write_bool_array(&[true, false, true]).unwrap();
    s.write_string_array(&["ab"]).unwrap();
    assert_eq!(
        hex_of(&s),
        "0x020000007b000000c8010000".to_owned() + "03000000010001" + "01000000020000006162"
    );
}

#[test]
fn snapshot_nested_stream() {
    let mut sub = Stream::new();
    sub.write_bool(true);
    let mut s = Stream::new();
    s.write_stream(&sub).unwrap();
    s.write_stream(&Stream::new()).unwrap();
    assert_eq!(hex_of(&s), "0x010000000100000000");
}

struct MatchInfo {
    match_id: i32,
    player_ids: Vec<i32>,
    player_names: Vec<String>,
}

impl StreamSerializer for MatchInfo {
    fn write_to(&self, stream: &mut Stream) -> Result<()> {
        stream.write_int(self.match_id);
        stream.write_int_array(&self.player_ids)?;
        stream.write_string_array(&self.player_names)
    }

    fn read_from(&mut self, stream: &mut Stream) -> Result<()> {
        self.match_id = stream.read_int()?;
        self.player_ids = stream.read_int_array()?;
        self.player_names = stream.read_string_array()?;
        Ok(())
    }
}

#[test]
fn snapshot_composite() {
    let info = MatchInfo {
        match_id: 1231,
        player_ids: vec![1, 2],
        player_names: vec!["rufus".into(), "dufus".into()],
    };
    let mut s = Stream::new();
    s.write(&info).unwrap();
    let expected = [
        "0x26000000",
        "cf040000",
        "020000000100000002000000",
        "02000000",
        "050000007275667573",
        "050000006475667573",
    ]
    .concat();
    assert_eq!(hex_of(&s), expected);
}
