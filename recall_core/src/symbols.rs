use play_kit::cue::SymbolId;

/// Size of the fixed symbol set. Bounds sequence entropy; the engine draws
/// uniformly from `0..SYMBOL_SET_SIZE`.
pub const SYMBOL_SET_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInfo {
    pub id: SymbolId,
    pub name: &'static str,
}

/// The eight tappable symbols, in button order.
pub const SYMBOLS: [SymbolInfo; SYMBOL_SET_SIZE as usize] = [
    SymbolInfo { id: 0, name: "red" },
    SymbolInfo { id: 1, name: "green" },
    SymbolInfo { id: 2, name: "blue" },
    SymbolInfo { id: 3, name: "yellow" },
    SymbolInfo { id: 4, name: "purple" },
    SymbolInfo { id: 5, name: "orange" },
    SymbolInfo { id: 6, name: "pink" },
    SymbolInfo { id: 7, name: "teal" },
];

pub fn symbol_name(id: SymbolId) -> &'static str {
    SYMBOLS
        .get(id as usize)
        .map(|s| s.name)
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_table_positions() {
        for (i, symbol) in SYMBOLS.iter().enumerate() {
            assert_eq!(symbol.id as usize, i);
        }
    }

    #[test]
    fn out_of_range_name_is_stable() {
        assert_eq!(symbol_name(3), "yellow");
        assert_eq!(symbol_name(200), "unknown");
    }
}
