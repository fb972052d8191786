pub static ENCODE_HELP: &str = "Convert a regular image to PIF

Any format zune-image can read is accepted. Alpha is dropped
and the current local time is written into the file.";

pub static DECODE_HELP: &str = "Convert a PIF file to a regular image

The output format is chosen from the extension of the output path.
Decoded pixels are RGBA with a fully opaque alpha channel.";

pub static INITIALS_HELP: &str = "Author initials

Only the first two characters are stored, shorter text is padded
with spaces. Characters outside latin-1 are stored as `?`";

pub static SIGNATURE_HELP: &str = "Free text signature

Only the first 16 characters are stored, shorter text is padded
with spaces. Characters outside latin-1 are stored as `?`";

pub static HEXDUMP_HELP: &str = "Print a hexdump of a PIF file

The file is parsed first, so only well formed PIF files can be dumped.
Each line holds 16 bytes prefixed by the offset of the first one.";

pub static STRICT_HELP: &str = "Reject files with unexpected header bytes

By default a warning is logged and the file is decoded anyway.";
