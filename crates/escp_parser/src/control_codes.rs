// ASCII control character codes
pub const TAB: u8 = 0x09;
pub const LINE_FEED: u8 = 0x0A;
pub const FORM_FEED: u8 = 0x0C;
pub const CARRIAGE_RETURN: u8 = 0x0D;
pub const ESC: u8 = 0x1B;
