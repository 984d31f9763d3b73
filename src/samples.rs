//! Sample paragraphs shared by the demo binary, the benchmarks, and the
//! tests, in rough size order.

/// Alphabet row with one long tail word.
pub const ALPHA: &str = "a b c d e f g h i j k l m n o p qqqqqqqqq";

/// One line of W. S. Gilbert's Mikado patter song.
pub const GILBERT_SHORT: &str = "To sit in solemn silence on a dull, dark dock";

/// The full Mikado patter verse.
pub const GILBERT_FULL: &str = "To sit in solemn silence in a dull, dark dock, \
In a pestilential prison, with a life-long lock, \
Awaiting the sensation of a short, sharp shock, \
From a cheap and chippy chopper on a big, black block!";

/// Preamble to the United States Constitution.
pub const PREAMBLE: &str = "We the People of the United States, in Order to \
form a more perfect Union, establish Justice, insure domestic Tranquility, \
provide for the common defence, promote the general Welfare, and secure the \
Blessings of Liberty to ourselves and our Posterity, do ordain and establish \
this Constitution for the United States of America.";

/// Opening paragraph of Dickens' Bleak House.
pub const BLEAK_HOUSE: &str = "London. Michaelmas term lately over, and the \
Lord Chancellor sitting in Lincoln's Inn Hall. Implacable November weather. \
As much mud in the streets as if the waters had but newly retired from the \
face of the earth, and it would not be wonderful to meet a Megalosaurus, \
forty feet long or so, waddling like an elephantine lizard up Holborn Hill. \
Smoke lowering down from chimney-pots, making a soft black drizzle, with \
flakes of soot in it as big as full-grown snowflakes--gone into mourning, \
one might imagine, for the death of the sun.";

/// Every sample paired with a short name.
pub const ALL: [(&str, &str); 5] = [
    ("alpha", ALPHA),
    ("gilbert_short", GILBERT_SHORT),
    ("gilbert_full", GILBERT_FULL),
    ("preamble", PREAMBLE),
    ("bleak_house", BLEAK_HOUSE),
];
