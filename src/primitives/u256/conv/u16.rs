use crate::primitives::U256;

impl TryFrom<U256> for u16 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[..3].iter().any(|&l| l != 0) || value.0[3] > u64::from(u16::MAX) {
            return Err(());
        }

        Ok(value.0[3] as u16)
    }
}

impl From<u16> for U256 {
    fn from(value: u16) -> Self {
        U256([0, 0, 0, u64::from(value)])
    }
}
