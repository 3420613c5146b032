use exifmeta_common::exif::Ifd;

use super::Directory;

impl Directory {
    pub fn debug_dump(&self) -> String {
        let mut out = format!("Byte order: {:?}\n", self.byte_order);

        for ifd in Ifd::ALL {
            let mut properties = self.in_ifd(ifd).peekable();
            if properties.peek().is_none() {
                continue;
            }

            out.push_str(&format!("\n{ifd:?}\n"));
            out.push_str("------------------------------\n");
            for property in properties {
                let name = property.tag.long_name();
                match property.to_wire() {
                    Ok(wire) => out.push_str(&format!(
                        "{name} {:?}({}): {}\n",
                        wire.wire_type, wire.count, property.value
                    )),
                    Err(err) => out.push_str(&format!("{name}: {err}\n")),
                }
            }
        }

        if let Some(location) = self.location() {
            out.push_str(&format!("\nLocation: {}\n", location.iso_6709()));
        }

        if let Some(thumbnail) = &self.thumbnail {
            out.push_str(&format!(
                "\nThumbnail: {:?} with {} bytes\n",
                thumbnail.kind,
                thumbnail.data.len()
            ));
        }

        out
    }
}
