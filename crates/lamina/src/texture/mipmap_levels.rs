use crate::error::TextureError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MipmapLevels {
    Complete,
    Partial(u8),
}

impl MipmapLevels {
    /// Resolves the level count for a texture whose largest dimension is `size`.
    pub fn to_u32(&self, size: u32) -> Result<u32, TextureError> {
        if size == 0 {
            return Err(TextureError::InvalidDescription {
                reason: "cannot derive mipmap levels for a zero-sized texture",
            });
        }

        let max_levels = u32::BITS - size.leading_zeros();

        match *self {
            MipmapLevels::Complete => Ok(max_levels),
            MipmapLevels::Partial(levels) => {
                let levels = levels as u32;

                if levels == 0 || levels > max_levels {
                    return Err(TextureError::InvalidDescription {
                        reason: "partial mipmap level count must be between 1 and the complete \
                            level count",
                    });
                }

                Ok(levels)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_chain_reaches_one_by_one() {
        assert_eq!(MipmapLevels::Complete.to_u32(1).unwrap(), 1);
        assert_eq!(MipmapLevels::Complete.to_u32(256).unwrap(), 9);
        assert_eq!(MipmapLevels::Complete.to_u32(300).unwrap(), 9);
    }

    #[test]
    fn partial_levels_are_bounded() {
        assert_eq!(MipmapLevels::Partial(3).to_u32(256).unwrap(), 3);
        assert!(MipmapLevels::Partial(0).to_u32(256).is_err());
        assert!(MipmapLevels::Partial(10).to_u32(256).is_err());
    }
}
