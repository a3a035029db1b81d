//! Reference decks.
//!
//! - [`BOX_DECK`]: a 10x10x3 grid exercising `BOX`/`ENDBOX`, per-record
//!   boxes, every scalar edit keyword and several `OPERATE` functions.
//! - [`BOX_TOO_SMALL_DECK`]: a data keyword with more values than its box.
//! - [`BOX_OUT_OF_EXTENT_DECK`]: a `BOX` reaching past the grid.

/// 10x10x3 deck whose resulting properties are known in closed form:
///
/// - `PERMY = 2 * PERMX`, `PERMZ = 0.25 * PERMX`
/// - `SATNUM` is 10 in the box `i,j,k <= 1` and 2 elsewhere
/// - `FIPNUM` is `4 * SATNUM` in that box and `2 * SATNUM` elsewhere
/// - `PVTNUM = k`, `EQLNUM = 77 + 2k`, `PORO = 0.25`
/// - `NTG` at (0,0,0)=8.5, (0,5,0)=5.0, (0,0,1)=4.0, (0,5,1)=4.0,
///   (0,0,2)=2.0, and 1.0 everywhere else.
pub const BOX_DECK: &str = "\
RUNSPEC
DIMENS
 10 10 3 /
OIL
WATER
METRIC

GRID
-- one value per layer
PERMX
 100*10 100*20 100*30 /

COPY
 PERMX PERMY /
 PERMX PERMZ /
/

MULTIPLY
 PERMZ 0.25 /
 PERMY 2    /
/

EQUALS
 PORO 0.25 /
/

NTG
 300*1 /

EQUALS
 NTG 3.0  1 1  1 1  1 1 /
/

OPERATE
 NTG 1 1 1 1 1 1 MULTA NTG 2.5 1.0 / t = 2.5 * 3 + 1
 NTG 1 1 6 6 1 1 POLY  NTG 4.0 1.0 / t = 1 + 4 * 1
/

EQUALS
 MULTPV 4.0  1 10  1 10  2 2 /
/

OPERATE
 NTG 1 1 1 1 2 2 COPY   MULTPV 0   0 /
 NTG 1 1 6 6 2 2 MINLIM NTG    4.0 0 /
/

EQUALS
 NTG 7  1 1  1 1  3 3 /
/

OPERATE
 NTG 1 1 1 1 3 3 MAXLIM NTG 2.0 0 /
/

PROPS

REGIONS
SATNUM
 300*2 /

BOX
 1 2 1 2 1 2 /
SATNUM
 8*10 /
ENDBOX

COPY
 SATNUM FIPNUM /
/

MULTIPLY
 FIPNUM 2 /
 FIPNUM 2  1 2  1 2  1 2 /
/

EQUALS
 PVTNUM 0   1 10  1 10  1 1 /
 PVTNUM 1   1 10  1 10  2 2 /
 PVTNUM 2   1 10  1 10  3 3 /
 EQLNUM 77 /
/

ADD
 EQLNUM 2   1 10  1 10  2 2 /
 EQLNUM 4   1 10  1 10  3 3 /
/

SOLUTION
";

/// 27-cell box followed by a 30-value `PERMX`.
pub const BOX_TOO_SMALL_DECK: &str = "\
RUNSPEC
DIMENS
 10 10 3 /
GRID
PERMX
 300*1 /
BOX
 1 3 1 3 1 3 /
PERMX
 30*0.25 /
ENDBOX
";

/// A `BOX` whose i range ends past `nx`, after an edit that must survive.
pub const BOX_OUT_OF_EXTENT_DECK: &str = "\
DIMENS
 10 10 3 /
GRID
EQUALS
 PORO 0.2 /
/
BOX
 1 11 1 10 1 3 /
EQUALS
 PORO 0.3 /
/
";
