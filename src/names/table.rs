//! Reference color names, sorted ascending by hex code.

use super::NamedColor;

pub(crate) static COLOR_NAMES: [NamedColor; 716] = [
    NamedColor::new(0x000000, "black"),
    NamedColor::new(0x000080, "navy blue"),
    NamedColor::new(0x00009c, "duke blue"),
    NamedColor::new(0x0000cd, "medium blue"),
    NamedColor::new(0x0000ff, "blue"),
    NamedColor::new(0x000f89, "phthalo blue"),
    NamedColor::new(0x0014a8, "zaffre"),
    NamedColor::new(0x002147, "oxford blue"),
    NamedColor::new(0x002387, "resolution blue"),
    NamedColor::new(0x003153, "prussian blue"),
    NamedColor::new(0x004040, "rich black"),
    NamedColor::new(0x00416a, "indigo dye"),
    NamedColor::new(0x004225, "british racing green"),
    NamedColor::new(0x004242, "warm black"),
    NamedColor::new(0x0047ab, "cobalt blue"),
    NamedColor::new(0x004b49, "deep jungle green"),
    NamedColor::new(0x00563f, "castleton green"),
    NamedColor::new(0x0063dc, "flickr blue"),
    NamedColor::new(0x006600, "pakistan green"),
    NamedColor::new(0x006a4e, "bottle green"),
    NamedColor::new(0x006b3c, "cadmium green"),
    NamedColor::new(0x006db0, "honolulu blue"),
    NamedColor::new(0x00703c, "dartmouth green"),
    NamedColor::new(0x0070b8, "spanish blue"),
    NamedColor::new(0x0072bb, "french blue"),
    NamedColor::new(0x007474, "skobeloff"),
    NamedColor::new(0x00755e, "tropical rain forest"),
    NamedColor::new(0x007ba7, "cerulean"),
    NamedColor::new(0x007bb8, "star command blue"),
    NamedColor::new(0x007f5c, "spanish viridian"),
    NamedColor::new(0x007f66, "generic viridian"),
    NamedColor::new(0x007fff, "azure"),
    NamedColor::new(0x008080, "teal"),
    NamedColor::new(0x008b8b, "dark cyan"),
    NamedColor::new(0x009150, "spanish green"),
    NamedColor::new(0x009698, "viridian green"),
    NamedColor::new(0x009966, "green-cyan"),
    NamedColor::new(0x009e60, "shamrock green"),
    NamedColor::new(0x00a693, "persian green"),
    NamedColor::new(0x00a86b, "jade"),
    NamedColor::new(0x00b7eb, "cyan (process)"),
    NamedColor::new(0x00bfff, "deep sky blue"),
    NamedColor::new(0x00cc99, "caribbean green"),
    NamedColor::new(0x00cccc, "robin egg blue"),
    NamedColor::new(0x00ccff, "vivid sky blue"),
    NamedColor::new(0x00ced1, "dark turquoise"),
    NamedColor::new(0x00fa9a, "medium spring green"),
    NamedColor::new(0x00ff40, "erin"),
    NamedColor::new(0x00ff7f, "spring green"),
    NamedColor::new(0x00ffef, "turquoise blue"),
    NamedColor::new(0x00ffff, "spanish sky blue"),
    NamedColor::new(0x013220, "dark green"),
    NamedColor::new(0x014421, "up forest green"),
    NamedColor::new(0x01796f, "pine green"),
    NamedColor::new(0x03c03c, "dark pastel green"),
    NamedColor::new(0x0a7e8c, "metallic seaweed"),
    NamedColor::new(0x0abab5, "tiffany blue"),
    NamedColor::new(0x0bda51, "malachite"),
    NamedColor::new(0x0c020f, "xiketic"),
    NamedColor::new(0x0d98ba, "blue-green"),
    NamedColor::new(0x0f4d92, "yale blue"),
    NamedColor::new(0x0f52ba, "sapphire"),
    NamedColor::new(0x100c08, "smoky black"),
    NamedColor::new(0x1034a6, "egyptian blue"),
    NamedColor::new(0x1164b4, "green-blue"),
    NamedColor::new(0x123524, "phthalo green"),
    NamedColor::new(0x126180, "blue sapphire"),
    NamedColor::new(0x138808, "india green"),
    NamedColor::new(0x15f4ee, "fluorescent blue"),
    NamedColor::new(0x177245, "dark spring green"),
    NamedColor::new(0x18453b, "msu green"),
    NamedColor::new(0x191970, "midnight blue"),
    NamedColor::new(0x195905, "lincoln green"),
    NamedColor::new(0x1a2421, "dark jungle green"),
    NamedColor::new(0x1b1811, "black chocolate"),
    NamedColor::new(0x1b1b1b, "eerie black"),
    NamedColor::new(0x1b4d3e, "english green"),
    NamedColor::new(0x1c05b3, "trypan blue"),
    NamedColor::new(0x1c39bb, "persian blue"),
    NamedColor::new(0x1ca9c9, "pacific blue"),
    NamedColor::new(0x1d2951, "space cadet"),
    NamedColor::new(0x1e90ff, "dodger blue"),
    NamedColor::new(0x20b2aa, "light sea green"),
    NamedColor::new(0x2243b6, "denim blue"),
    NamedColor::new(0x23297a, "st. patrick's blue"),
    NamedColor::new(0x232b2b, "charleston green"),
    NamedColor::new(0x242124, "raisin black"),
    NamedColor::new(0x246bce, "celtic blue"),
    NamedColor::new(0x26428b, "dark cornflower blue"),
    NamedColor::new(0x26619c, "lapis lazuli"),
    NamedColor::new(0x299617, "slimy green"),
    NamedColor::new(0x29ab87, "jungle green"),
    NamedColor::new(0x2a2f23, "pine tree"),
    NamedColor::new(0x2a3439, "gunmetal"),
    NamedColor::new(0x2a52be, "cerulean blue"),
    NamedColor::new(0x2d383a, "outer space (crayola)"),
    NamedColor::new(0x2d68c4, "true blue"),
    NamedColor::new(0x2e2787, "picotee blue"),
    NamedColor::new(0x2e2d88, "cosmic cobalt"),
    NamedColor::new(0x2e8b57, "sea green"),
    NamedColor::new(0x2f4f4f, "dark slate gray"),
    NamedColor::new(0x2f847c, "celadon green"),
    NamedColor::new(0x301934, "dark purple"),
    NamedColor::new(0x30ba8f, "mountain meadow"),
    NamedColor::new(0x30bfbf, "maximum blue green"),
    NamedColor::new(0x317873, "myrtle green"),
    NamedColor::new(0x318ce7, "bleu de france"),
    NamedColor::new(0x32127a, "persian indigo"),
    NamedColor::new(0x32174d, "russian violet"),
    NamedColor::new(0x324ab2, "violet-blue"),
    NamedColor::new(0x32cd32, "lime green"),
    NamedColor::new(0x353839, "onyx"),
    NamedColor::new(0x354230, "kombu green"),
    NamedColor::new(0x355e3b, "hunter green"),
    NamedColor::new(0x36454f, "charcoal"),
    NamedColor::new(0x367588, "teal blue"),
    NamedColor::new(0x39ff14, "neon green"),
    NamedColor::new(0x3ab09e, "keppel"),
    NamedColor::new(0x3b2f2f, "black coffee"),
    NamedColor::new(0x3b3c36, "black olive"),
    NamedColor::new(0x3b7a57, "amazon"),
    NamedColor::new(0x3c1414, "dark sienna"),
    NamedColor::new(0x3c69e7, "bluetiful"),
    NamedColor::new(0x3cb371, "medium sea green"),
    NamedColor::new(0x3d0c02, "black bean"),
    NamedColor::new(0x3d2b1f, "bistre"),
    NamedColor::new(0x3e8ede, "tufts blue"),
    NamedColor::new(0x3eb489, "mint"),
    NamedColor::new(0x3f00ff, "ultramarine"),
    NamedColor::new(0x3fff00, "harlequin"),
    NamedColor::new(0x40826d, "viridian"),
    NamedColor::new(0x40e0d0, "turquoise"),
    NamedColor::new(0x4166f5, "ultramarine blue"),
    NamedColor::new(0x43302e, "old burgundy"),
    NamedColor::new(0x436b95, "queen blue"),
    NamedColor::new(0x43b3ae, "verdigris"),
    NamedColor::new(0x444c38, "rifle green"),
    NamedColor::new(0x4666ff, "neon blue"),
    NamedColor::new(0x4682b4, "steel blue"),
    NamedColor::new(0x47abcc, "maximum blue"),
    NamedColor::new(0x483c32, "taupe"),
    NamedColor::new(0x483d8b, "dark slate blue"),
    NamedColor::new(0x48bf91, "ocean green"),
    NamedColor::new(0x48d1cc, "medium turquoise"),
    NamedColor::new(0x4a5d23, "dark moss green"),
    NamedColor::new(0x4a646c, "deep space sparkle"),
    NamedColor::new(0x4b0082, "indigo"),
    NamedColor::new(0x4b5320, "army green"),
    NamedColor::new(0x4c2882, "spanish violet"),
    NamedColor::new(0x4cbb17, "kelly green"),
    NamedColor::new(0x4d5d53, "feldgrau"),
    NamedColor::new(0x4d8c57, "middle green"),
    NamedColor::new(0x4e5180, "purple navy"),
    NamedColor::new(0x4f42b5, "ocean blue"),
    NamedColor::new(0x4f7942, "fern green"),
    NamedColor::new(0x5072a7, "blue yonder"),
    NamedColor::new(0x507d2a, "sap green"),
    NamedColor::new(0x50c878, "paris green"),
    NamedColor::new(0x512888, "ksu purple"),
    NamedColor::new(0x534b4f, "dark liver"),
    NamedColor::new(0x536872, "cadet"),
    NamedColor::new(0x536878, "payne's grey"),
    NamedColor::new(0x545aa7, "liberty"),
    NamedColor::new(0x54626f, "black coral"),
    NamedColor::new(0x555d50, "ebony"),
    NamedColor::new(0x556b2f, "dark olive green"),
    NamedColor::new(0x563c5c, "english violet"),
    NamedColor::new(0x56887d, "wintergreen dream"),
    NamedColor::new(0x56a0d3, "carolina blue"),
    NamedColor::new(0x58427c, "cyber grape"),
    NamedColor::new(0x59260b, "seal brown"),
    NamedColor::new(0x592720, "caput mortuum"),
    NamedColor::new(0x5946b2, "plump purple"),
    NamedColor::new(0x5a4fcf, "iris"),
    NamedColor::new(0x5b92e5, "united nations blue"),
    NamedColor::new(0x5d3954, "dark byzantium"),
    NamedColor::new(0x5da493, "polished pine"),
    NamedColor::new(0x5dadec, "blue jeans"),
    NamedColor::new(0x5e8c31, "maximum green"),
    NamedColor::new(0x5f8a8b, "steel teal"),
    NamedColor::new(0x5f9ea0, "cadet blue"),
    NamedColor::new(0x5fa778, "shiny shamrock"),
    NamedColor::new(0x6050dc, "majorelle blue"),
    NamedColor::new(0x6082b6, "glaucous"),
    NamedColor::new(0x614051, "eggplant"),
    NamedColor::new(0x635147, "umber"),
    NamedColor::new(0x6495ed, "cornflower blue"),
    NamedColor::new(0x65000b, "rosewood"),
    NamedColor::new(0x654321, "dark brown"),
    NamedColor::new(0x660000, "blood red"),
    NamedColor::new(0x66023c, "tyrian purple"),
    NamedColor::new(0x663399, "rebecca purple"),
    NamedColor::new(0x664228, "van dyke brown"),
    NamedColor::new(0x665d1e, "antique bronze"),
    NamedColor::new(0x6699cc, "livid"),
    NamedColor::new(0x66ddaa, "medium aquamarine"),
    NamedColor::new(0x66ff00, "bright green"),
    NamedColor::new(0x673147, "wine dregs"),
    NamedColor::new(0x674846, "rose ebony"),
    NamedColor::new(0x674c47, "liver"),
    NamedColor::new(0x676767, "granite gray"),
    NamedColor::new(0x679267, "russian green"),
    NamedColor::new(0x682860, "palatinate purple"),
    NamedColor::new(0x696969, "dim gray"),
    NamedColor::new(0x6a0dad, "purple"),
    NamedColor::new(0x6a5acd, "slate blue"),
    NamedColor::new(0x6c3082, "eminence"),
    NamedColor::new(0x6c541e, "field drab"),
    NamedColor::new(0x6ca0dc, "little boy blue"),
    NamedColor::new(0x6d9bc3, "cerulean frost"),
    NamedColor::new(0x6eaea1, "green sheen"),
    NamedColor::new(0x6f00ff, "electric indigo"),
    NamedColor::new(0x6f4e37, "tuscan brown"),
    NamedColor::new(0x701c1c, "prune"),
    NamedColor::new(0x702670, "midnight"),
    NamedColor::new(0x704214, "sepia"),
    NamedColor::new(0x708090, "slate gray"),
    NamedColor::new(0x722f37, "wine"),
    NamedColor::new(0x727472, "nickel"),
    NamedColor::new(0x733380, "maximum purple"),
    NamedColor::new(0x738678, "xanadu"),
    NamedColor::new(0x73c2fb, "maya blue"),
    NamedColor::new(0x74c365, "mantis"),
    NamedColor::new(0x757575, "sonic silver"),
    NamedColor::new(0x777696, "rhythm"),
    NamedColor::new(0x778899, "light slate gray"),
    NamedColor::new(0x778ba5, "shadow blue"),
    NamedColor::new(0x77b5fe, "french sky blue"),
    NamedColor::new(0x78184a, "pansy purple"),
    NamedColor::new(0x7851a9, "royal purple"),
    NamedColor::new(0x79443b, "bole"),
    NamedColor::new(0x796878, "old lavender"),
    NamedColor::new(0x7b1113, "up maroon"),
    NamedColor::new(0x7b68ee, "medium slate blue"),
    NamedColor::new(0x7bb661, "bud green"),
    NamedColor::new(0x7c0a02, "barn red"),
    NamedColor::new(0x7c4848, "tuscan red"),
    NamedColor::new(0x7cfc00, "lawn green"),
    NamedColor::new(0x7df9ff, "electric blue"),
    NamedColor::new(0x7e5e60, "deep taupe"),
    NamedColor::new(0x7ed4e6, "middle blue"),
    NamedColor::new(0x7f1734, "claret"),
    NamedColor::new(0x7fffd4, "aquamarine"),
    NamedColor::new(0x800020, "oxblood"),
    NamedColor::new(0x801818, "falu red"),
    NamedColor::new(0x80461b, "russet"),
    NamedColor::new(0x807532, "spanish bistre"),
    NamedColor::new(0x808000, "olive"),
    NamedColor::new(0x81613c, "coyote brown"),
    NamedColor::new(0x826644, "raw umber"),
    NamedColor::new(0x838996, "roman silver"),
    NamedColor::new(0x841617, "ou crimson red"),
    NamedColor::new(0x841b2d, "antique ruby"),
    NamedColor::new(0x848482, "old silver"),
    NamedColor::new(0x856088, "chinese violet"),
    NamedColor::new(0x856d4d, "french bistre"),
    NamedColor::new(0x85754e, "gold fusion"),
    NamedColor::new(0x86608e, "pomp and power"),
    NamedColor::new(0x87413f, "brandy"),
    NamedColor::new(0x87a96b, "asparagus"),
    NamedColor::new(0x87ceeb, "sky blue"),
    NamedColor::new(0x87cefa, "light sky blue"),
    NamedColor::new(0x87ff2a, "spring frost"),
    NamedColor::new(0x880085, "mardi gras"),
    NamedColor::new(0x8806ce, "french violet"),
    NamedColor::new(0x882d17, "sienna"),
    NamedColor::new(0x88540b, "brown"),
    NamedColor::new(0x893843, "solid pink"),
    NamedColor::new(0x893f45, "cordovan"),
    NamedColor::new(0x89cff0, "baby blue"),
    NamedColor::new(0x8a2be2, "blue-violet"),
    NamedColor::new(0x8a3324, "burnt umber"),
    NamedColor::new(0x8a496b, "twilight lavender"),
    NamedColor::new(0x8a795d, "shadow"),
    NamedColor::new(0x8a7f80, "rocket metallic"),
    NamedColor::new(0x8a9a5b, "turtle green"),
    NamedColor::new(0x8b0000, "dark red"),
    NamedColor::new(0x8b008b, "dark magenta"),
    NamedColor::new(0x8b4513, "saddle brown"),
    NamedColor::new(0x8b72be, "middle blue purple"),
    NamedColor::new(0x8b8589, "taupe gray"),
    NamedColor::new(0x8b8680, "middle grey"),
    NamedColor::new(0x8ba8b7, "pewter blue"),
    NamedColor::new(0x8c92ac, "cool grey"),
    NamedColor::new(0x8cbed6, "dark sky blue"),
    NamedColor::new(0x8d4e85, "razzmic berry"),
    NamedColor::new(0x8da399, "morning blue"),
    NamedColor::new(0x8db600, "apple green"),
    NamedColor::new(0x8dd9cc, "middle blue green"),
    NamedColor::new(0x8e3a59, "quinacridone magenta"),
    NamedColor::new(0x8e4585, "plum"),
    NamedColor::new(0x8f00ff, "violet"),
    NamedColor::new(0x8f9779, "artichoke"),
    NamedColor::new(0x8fbc8f, "dark sea green"),
    NamedColor::new(0x8fd400, "sheen green"),
    NamedColor::new(0x905d5d, "rose taupe"),
    NamedColor::new(0x90ee90, "light green"),
    NamedColor::new(0x914e75, "sugar plum"),
    NamedColor::new(0x915c83, "antique fuchsia"),
    NamedColor::new(0x915f6d, "raspberry glace"),
    NamedColor::new(0x91a3b0, "cadet grey"),
    NamedColor::new(0x9370db, "medium purple"),
    NamedColor::new(0x93c572, "pistachio"),
    NamedColor::new(0x93ccea, "light cornflower blue"),
    NamedColor::new(0x9400d3, "dark violet"),
    NamedColor::new(0x954535, "chestnut"),
    NamedColor::new(0x960018, "carmine"),
    NamedColor::new(0x967117, "sand dune"),
    NamedColor::new(0x9678b6, "purple mountain majesty"),
    NamedColor::new(0x96c8a2, "eton blue"),
    NamedColor::new(0x979aaa, "manatee"),
    NamedColor::new(0x987456, "liver chestnut"),
    NamedColor::new(0x98817b, "cinereous"),
    NamedColor::new(0x989898, "spanish gray"),
    NamedColor::new(0x98ff98, "mint green"),
    NamedColor::new(0x9932cc, "dark orchid"),
    NamedColor::new(0x996515, "golden brown"),
    NamedColor::new(0x996666, "copper rose"),
    NamedColor::new(0x9966cc, "amethyst"),
    NamedColor::new(0x997a8d, "mountbatten pink"),
    NamedColor::new(0x9a4eae, "purpureus"),
    NamedColor::new(0x9ab973, "olivine"),
    NamedColor::new(0x9acd32, "yellow-green"),
    NamedColor::new(0x9bc4e2, "pale cerulean"),
    NamedColor::new(0x9c51b6, "purple plum"),
    NamedColor::new(0x9c7c38, "metallic sunburst"),
    NamedColor::new(0x9e5e6f, "rose dust"),
    NamedColor::new(0x9efd38, "french lime"),
    NamedColor::new(0x9f00ff, "vivid violet"),
    NamedColor::new(0x9f1d35, "vivid burgundy"),
    NamedColor::new(0x9f4576, "magenta haze"),
    NamedColor::new(0x9f8170, "beaver"),
    NamedColor::new(0x9fa91f, "citron"),
    NamedColor::new(0xa020f0, "veronica"),
    NamedColor::new(0xa0d6b4, "turquoise green"),
    NamedColor::new(0xa17a74, "burnished brown"),
    NamedColor::new(0xa1caf1, "baby blue eyes"),
    NamedColor::new(0xa2006d, "flirt"),
    NamedColor::new(0xa2a2d0, "blue bell"),
    NamedColor::new(0xa2add0, "wild blue yonder"),
    NamedColor::new(0xa3c1ad, "cambridge blue"),
    NamedColor::new(0xa45a52, "redwood"),
    NamedColor::new(0xa4c639, "android green"),
    NamedColor::new(0xa50b5e, "jazzberry jam"),
    NamedColor::new(0xa52a2a, "auburn"),
    NamedColor::new(0xa55353, "middle red purple"),
    NamedColor::new(0xa57c00, "gold"),
    NamedColor::new(0xa63a79, "maximum red purple"),
    NamedColor::new(0xa67b5b, "tuscan tan"),
    NamedColor::new(0xa6a6a6, "quick silver"),
    NamedColor::new(0xa75502, "windsor tan"),
    NamedColor::new(0xa7f432, "green lizard"),
    NamedColor::new(0xa7fc00, "spring bud"),
    NamedColor::new(0xa81c07, "rufous"),
    NamedColor::new(0xa83731, "sweet brown"),
    NamedColor::new(0xa8516e, "china rose"),
    NamedColor::new(0xa8c3bc, "opal"),
    NamedColor::new(0xa99a86, "grullo"),
    NamedColor::new(0xa9ba9d, "laurel green"),
    NamedColor::new(0xaa381e, "chinese red"),
    NamedColor::new(0xaa98a9, "rose quartz"),
    NamedColor::new(0xaaf0d1, "magic mint"),
    NamedColor::new(0xab274f, "amaranth purple"),
    NamedColor::new(0xab4b52, "english red"),
    NamedColor::new(0xab4e52, "rose vale"),
    NamedColor::new(0xab92b3, "glossy grape"),
    NamedColor::new(0xacacac, "silver chalice"),
    NamedColor::new(0xacace6, "maximum blue purple"),
    NamedColor::new(0xacbf60, "middle green yellow"),
    NamedColor::new(0xace1af, "celadon"),
    NamedColor::new(0xace5ee, "blizzard blue"),
    NamedColor::new(0xad4379, "mystic maroon"),
    NamedColor::new(0xad6f69, "copper penny"),
    NamedColor::new(0xadd8e6, "light blue"),
    NamedColor::new(0xadff2f, "green-yellow"),
    NamedColor::new(0xae2029, "upsdell red"),
    NamedColor::new(0xaf4035, "medium carmine"),
    NamedColor::new(0xaf6e4d, "brown sugar"),
    NamedColor::new(0xafdbf5, "uranian blue"),
    NamedColor::new(0xb0b0b0, "light gray"),
    NamedColor::new(0xb0bf1a, "acid green"),
    NamedColor::new(0xb0c4de, "light steel blue"),
    NamedColor::new(0xb0e0e6, "powder blue"),
    NamedColor::new(0xb22222, "firebrick"),
    NamedColor::new(0xb284be, "african violet"),
    NamedColor::new(0xb2beb5, "ash gray"),
    NamedColor::new(0xb2ffff, "italian sky blue"),
    NamedColor::new(0xb31b1b, "carnelian"),
    NamedColor::new(0xb3446c, "raspberry rose"),
    NamedColor::new(0xb48395, "english lavender"),
    NamedColor::new(0xb53389, "fandango"),
    NamedColor::new(0xb5b35c, "olive green"),
    NamedColor::new(0xb7410e, "rust"),
    NamedColor::new(0xb768a2, "pearly purple"),
    NamedColor::new(0xb784a7, "opera mauve"),
    NamedColor::new(0xb87333, "copper"),
    NamedColor::new(0xb8860b, "dark goldenrod"),
    NamedColor::new(0xb94e48, "deep chestnut"),
    NamedColor::new(0xb9d9eb, "columbia blue"),
    NamedColor::new(0xba55d3, "medium orchid"),
    NamedColor::new(0xbbb477, "misty moss"),
    NamedColor::new(0xbc8f8f, "rosy brown"),
    NamedColor::new(0xbcb88a, "sage"),
    NamedColor::new(0xbcd4e6, "pale aqua"),
    NamedColor::new(0xbd33a4, "byzantine"),
    NamedColor::new(0xbdb76b, "dark khaki"),
    NamedColor::new(0xbdda57, "june bud"),
    NamedColor::new(0xbe4f62, "popstar"),
    NamedColor::new(0xbf00ff, "electric purple"),
    NamedColor::new(0xbfafb2, "black shadows"),
    NamedColor::new(0xbfc1c2, "silver sand"),
    NamedColor::new(0xc04000, "mahogany"),
    NamedColor::new(0xc08081, "old rose"),
    NamedColor::new(0xc09999, "tuscany"),
    NamedColor::new(0xc0c0c0, "silver"),
    NamedColor::new(0xc19a6b, "wood brown"),
    NamedColor::new(0xc21e56, "rose red"),
    NamedColor::new(0xc2b280, "sand"),
    NamedColor::new(0xc30b4e, "pictorial carmine"),
    NamedColor::new(0xc41e3a, "cardinal"),
    NamedColor::new(0xc46210, "alloy orange"),
    NamedColor::new(0xc4aead, "silver pink"),
    NamedColor::new(0xc4c3d0, "lavender gray"),
    NamedColor::new(0xc54b8c, "mulberry"),
    NamedColor::new(0xc5b358, "vegas gold"),
    NamedColor::new(0xc5cbe1, "light periwinkle"),
    NamedColor::new(0xc71585, "red-violet"),
    NamedColor::new(0xc72c48, "french raspberry"),
    NamedColor::new(0xc74375, "fuchsia rose"),
    NamedColor::new(0xc80815, "venetian red"),
    NamedColor::new(0xc84186, "smitten"),
    NamedColor::new(0xc8a2c8, "lilac"),
    NamedColor::new(0xc8ad7f, "light french beige"),
    NamedColor::new(0xc95a49, "cedar chest"),
    NamedColor::new(0xc9a0dc, "wisteria"),
    NamedColor::new(0xc9ffe5, "aero blue"),
    NamedColor::new(0xcae00d, "bitter lemon"),
    NamedColor::new(0xcb410b, "sinopia"),
    NamedColor::new(0xcb4154, "brick red"),
    NamedColor::new(0xcb6d51, "copper red"),
    NamedColor::new(0xcba135, "satin sheen gold"),
    NamedColor::new(0xcc3333, "persian red"),
    NamedColor::new(0xcc3336, "madder lake"),
    NamedColor::new(0xcc33cc, "steel pink"),
    NamedColor::new(0xcc397b, "fuchsia purple"),
    NamedColor::new(0xcc474b, "english vermillion"),
    NamedColor::new(0xcc5500, "burnt orange"),
    NamedColor::new(0xcc7722, "ochre"),
    NamedColor::new(0xcc8899, "puce"),
    NamedColor::new(0xcca01d, "lemon curry"),
    NamedColor::new(0xccccff, "periwinkle"),
    NamedColor::new(0xccff00, "electric lime"),
    NamedColor::new(0xcd5c5c, "indian red"),
    NamedColor::new(0xcd607e, "cinnamon satin"),
    NamedColor::new(0xcd7f32, "bronze"),
    NamedColor::new(0xcd9575, "antique brass"),
    NamedColor::new(0xce2029, "fire engine red"),
    NamedColor::new(0xce4676, "ruber"),
    NamedColor::new(0xceff00, "volt"),
    NamedColor::new(0xcf1020, "lava"),
    NamedColor::new(0xcf3476, "telemagenta"),
    NamedColor::new(0xcf6ba9, "super pink"),
    NamedColor::new(0xcf71af, "sky magenta"),
    NamedColor::new(0xcfb53b, "old gold"),
    NamedColor::new(0xd0f0c0, "tea green"),
    NamedColor::new(0xd0ff14, "arctic lime"),
    NamedColor::new(0xd10047, "spanish carmine"),
    NamedColor::new(0xd10056, "rubine red"),
    NamedColor::new(0xd1e231, "pear"),
    NamedColor::new(0xd2691e, "cocoa brown"),
    NamedColor::new(0xd2b48c, "tan"),
    NamedColor::new(0xd3212d, "amaranth red"),
    NamedColor::new(0xd3af37, "metallic gold"),
    NamedColor::new(0xd3d3d3, "light gray"),
    NamedColor::new(0xd40000, "rosso corsa"),
    NamedColor::new(0xd470a2, "wild orchid"),
    NamedColor::new(0xd473d4, "french mauve"),
    NamedColor::new(0xd65282, "mystic"),
    NamedColor::new(0xd68a59, "raw sienna"),
    NamedColor::new(0xd6cadd, "languid lavender"),
    NamedColor::new(0xd71868, "dogwood rose"),
    NamedColor::new(0xd7837f, "new york pink"),
    NamedColor::new(0xd891ef, "bright lilac"),
    NamedColor::new(0xd8b2d1, "pink lavender"),
    NamedColor::new(0xd8bfd8, "thistle"),
    NamedColor::new(0xd92121, "maximum red"),
    NamedColor::new(0xd9381e, "vermilion"),
    NamedColor::new(0xd982b5, "middle purple"),
    NamedColor::new(0xd98695, "shimmering blush"),
    NamedColor::new(0xd99058, "persian orange"),
    NamedColor::new(0xd9e650, "maximum green yellow"),
    NamedColor::new(0xda1884, "barbie pink"),
    NamedColor::new(0xda2c43, "rusty red"),
    NamedColor::new(0xda3287, "deep cerise"),
    NamedColor::new(0xda70d6, "orchid"),
    NamedColor::new(0xda9100, "harvest gold"),
    NamedColor::new(0xdaa520, "goldenrod"),
    NamedColor::new(0xdbd7d2, "timberwolf"),
    NamedColor::new(0xdc143c, "crimson"),
    NamedColor::new(0xdcdcdc, "gainsboro"),
    NamedColor::new(0xde3163, "cerise"),
    NamedColor::new(0xde5285, "fandango pink"),
    NamedColor::new(0xde5d83, "blush"),
    NamedColor::new(0xde6fa1, "thulian pink"),
    NamedColor::new(0xdea5a4, "pastel pink"),
    NamedColor::new(0xdeaa88, "tumbleweed"),
    NamedColor::new(0xdeb887, "burlywood"),
    NamedColor::new(0xdf00ff, "psychedelic purple"),
    NamedColor::new(0xdf73ff, "heliotrope"),
    NamedColor::new(0xe0115f, "ruby"),
    NamedColor::new(0xe0b0ff, "mauve"),
    NamedColor::new(0xe0ffff, "light cyan"),
    NamedColor::new(0xe1a95f, "earth yellow"),
    NamedColor::new(0xe2062c, "medium candy apple red"),
    NamedColor::new(0xe25822, "flame"),
    NamedColor::new(0xe2725b, "terra cotta"),
    NamedColor::new(0xe30022, "cadmium red"),
    NamedColor::new(0xe30b5d, "raspberry"),
    NamedColor::new(0xe3256b, "razzmatazz"),
    NamedColor::new(0xe32636, "rose madder"),
    NamedColor::new(0xe34234, "vermilion"),
    NamedColor::new(0xe3a857, "indian yellow"),
    NamedColor::new(0xe3ab57, "sunray"),
    NamedColor::new(0xe3dac9, "bone"),
    NamedColor::new(0xe3f988, "mindaro"),
    NamedColor::new(0xe40078, "red-purple"),
    NamedColor::new(0xe4007c, "mexican pink"),
    NamedColor::new(0xe4717a, "tango pink"),
    NamedColor::new(0xe48400, "fulvous"),
    NamedColor::new(0xe49b0f, "gamboge"),
    NamedColor::new(0xe4d96f, "straw"),
    NamedColor::new(0xe52b50, "amaranth"),
    NamedColor::new(0xe58e73, "middle red"),
    NamedColor::new(0xe5aa70, "fawn"),
    NamedColor::new(0xe5e4e2, "platinum"),
    NamedColor::new(0xe60026, "spanish red"),
    NamedColor::new(0xe63e62, "paradise pink"),
    NamedColor::new(0xe68fac, "charm pink"),
    NamedColor::new(0xe79fc4, "kobi"),
    NamedColor::new(0xe86100, "spanish orange"),
    NamedColor::new(0xe8ccd7, "queen pink"),
    NamedColor::new(0xe8f48c, "key lime"),
    NamedColor::new(0xe95c4b, "fire opal"),
    NamedColor::new(0xe97451, "burnt sienna"),
    NamedColor::new(0xe9967a, "dark salmon"),
    NamedColor::new(0xe9d66b, "hansa yellow"),
    NamedColor::new(0xeaa221, "marigold"),
    NamedColor::new(0xec5800, "persimmon"),
    NamedColor::new(0xecb176, "middle yellow red"),
    NamedColor::new(0xed872d, "cadmium orange"),
    NamedColor::new(0xed9121, "carrot orange"),
    NamedColor::new(0xedc9af, "desert sand"),
    NamedColor::new(0xedeae0, "alabaster"),
    NamedColor::new(0xeed202, "safety yellow"),
    NamedColor::new(0xeedc82, "flax"),
    NamedColor::new(0xeee600, "titanium yellow"),
    NamedColor::new(0xeeed09, "xanthic"),
    NamedColor::new(0xef98aa, "mauvelous"),
    NamedColor::new(0xefbbcc, "cameo pink"),
    NamedColor::new(0xefdecd, "almond"),
    NamedColor::new(0xefdfbb, "dutch white"),
    NamedColor::new(0xf08080, "light coral"),
    NamedColor::new(0xf0dc82, "buff"),
    NamedColor::new(0xf0ead6, "eggshell"),
    NamedColor::new(0xf0f8ff, "alice blue"),
    NamedColor::new(0xf0fff0, "honeydew"),
    NamedColor::new(0xf19cbb, "amaranth pink"),
    NamedColor::new(0xf1ddcf, "champagne pink"),
    NamedColor::new(0xf28500, "tangerine"),
    NamedColor::new(0xf2ba49, "maximum yellow red"),
    NamedColor::new(0xf2bdcd, "orchid pink"),
    NamedColor::new(0xf37a48, "mandarin"),
    NamedColor::new(0xf38fa9, "vanilla ice"),
    NamedColor::new(0xf3e5ab, "vanilla"),
    NamedColor::new(0xf4a460, "sandy brown"),
    NamedColor::new(0xf4c2c2, "tea rose"),
    NamedColor::new(0xf4c430, "saffron"),
    NamedColor::new(0xf4ca16, "jonquil"),
    NamedColor::new(0xf4f0ec, "isabelline"),
    NamedColor::new(0xf56fa1, "cyclamen"),
    NamedColor::new(0xf58025, "princeton orange"),
    NamedColor::new(0xf5bd1f, "orange-yellow"),
    NamedColor::new(0xf5deb3, "wheat"),
    NamedColor::new(0xf5e050, "minion yellow"),
    NamedColor::new(0xf5f5dc, "beige"),
    NamedColor::new(0xf5f5f5, "cultured"),
    NamedColor::new(0xf5fffa, "mint cream"),
    NamedColor::new(0xf64a8a, "french rose"),
    NamedColor::new(0xf6adc6, "nadeshiko pink"),
    NamedColor::new(0xf6eabe, "lemon meringue"),
    NamedColor::new(0xf75394, "violet-red"),
    NamedColor::new(0xf77fbe, "persian pink"),
    NamedColor::new(0xf78fa7, "pink sherbet"),
    NamedColor::new(0xf7bfbe, "spanish pink"),
    NamedColor::new(0xf7e7ce, "champagne"),
    NamedColor::new(0xf88379, "tea rose"),
    NamedColor::new(0xf8b878, "mellow apricot"),
    NamedColor::new(0xf8de7e, "mellow yellow"),
    NamedColor::new(0xf8f4ff, "magnolia"),
    NamedColor::new(0xf8f8ff, "ghost white"),
    NamedColor::new(0xf9429e, "rose bonbon"),
    NamedColor::new(0xfa8072, "salmon"),
    NamedColor::new(0xfad6a5, "tuscan"),
    NamedColor::new(0xfada5e, "stil de grain yellow"),
    NamedColor::new(0xfadadd, "pale pink"),
    NamedColor::new(0xfae7b5, "banana mania"),
    NamedColor::new(0xfaebd7, "antique white"),
    NamedColor::new(0xfaf0be, "blond"),
    NamedColor::new(0xfaf0e6, "linen"),
    NamedColor::new(0xfafa37, "maximum yellow"),
    NamedColor::new(0xfafad2, "light goldenrod yellow"),
    NamedColor::new(0xfb0081, "flickr pink"),
    NamedColor::new(0xfb4d46, "tart orange"),
    NamedColor::new(0xfb607f, "brink pink"),
    NamedColor::new(0xfbceb1, "apricot"),
    NamedColor::new(0xfbec5d, "maize"),
    NamedColor::new(0xfc0fc0, "shocking pink"),
    NamedColor::new(0xfc6c85, "wild watermelon"),
    NamedColor::new(0xfc74fd, "pink flamingo"),
    NamedColor::new(0xfc89ac, "tickle me pink"),
    NamedColor::new(0xfcc200, "golden poppy"),
    NamedColor::new(0xfd3a4a, "red salsa"),
    NamedColor::new(0xfd3f92, "french fuchsia"),
    NamedColor::new(0xfd6c9e, "french pink"),
    NamedColor::new(0xfdbe02, "mango"),
    NamedColor::new(0xfddde6, "piggy pink"),
    NamedColor::new(0xfdee00, "aureolin"),
    NamedColor::new(0xfdf5e6, "old lace"),
    NamedColor::new(0xfdff00, "lemon glacier"),
    NamedColor::new(0xfe28a2, "persian rose"),
    NamedColor::new(0xfe4eda, "purple pizzazz"),
    NamedColor::new(0xfe6f5e, "bittersweet"),
    NamedColor::new(0xfebaad, "melon"),
    NamedColor::new(0xfed8b1, "light orange"),
    NamedColor::new(0xfefefa, "baby powder"),
    NamedColor::new(0xff0000, "red"),
    NamedColor::new(0xff007c, "winter sky"),
    NamedColor::new(0xff007f, "rose"),
    NamedColor::new(0xff00ff, "magenta"),
    NamedColor::new(0xff0800, "candy apple red"),
    NamedColor::new(0xff1493, "deep pink"),
    NamedColor::new(0xff1dce, "hot magenta"),
    NamedColor::new(0xff2400, "scarlet"),
    NamedColor::new(0xff33cc, "razzle dazzle rose"),
    NamedColor::new(0xff355e, "radical red"),
    NamedColor::new(0xff3800, "coquelicot"),
    NamedColor::new(0xff3855, "sizzling red"),
    NamedColor::new(0xff43a4, "wild strawberry"),
    NamedColor::new(0xff5349, "red-orange"),
    NamedColor::new(0xff5470, "fiery rose"),
    NamedColor::new(0xff55a3, "brilliant rose"),
    NamedColor::new(0xff5a36, "portland orange"),
    NamedColor::new(0xff6347, "tomato"),
    NamedColor::new(0xff66cc, "rose pink"),
    NamedColor::new(0xff69b4, "hot pink"),
    NamedColor::new(0xff6e4a, "outrageous orange"),
    NamedColor::new(0xff6fff, "ultra pink"),
    NamedColor::new(0xff7518, "pumpkin"),
    NamedColor::new(0xff7800, "safety orange"),
    NamedColor::new(0xff7a00, "heat wave"),
    NamedColor::new(0xff7f00, "orange"),
    NamedColor::new(0xff7f50, "coral"),
    NamedColor::new(0xff8243, "mango tango"),
    NamedColor::new(0xff8c00, "dark orange"),
    NamedColor::new(0xff91a4, "salmon pink"),
    NamedColor::new(0xff91af, "schauss pink"),
    NamedColor::new(0xff9933, "deep saffron"),
    NamedColor::new(0xff9966, "atomic tangerine"),
    NamedColor::new(0xff9f00, "orange peel"),
    NamedColor::new(0xffa07a, "light salmon"),
    NamedColor::new(0xffa089, "vivid tangerine"),
    NamedColor::new(0xffa6c9, "carnation pink"),
    NamedColor::new(0xffa700, "chrome yellow"),
    NamedColor::new(0xffae42, "yellow orange"),
    NamedColor::new(0xffb200, "chinese yellow"),
    NamedColor::new(0xffb6c1, "light pink"),
    NamedColor::new(0xffb7c5, "cherry blossom pink"),
    NamedColor::new(0xffba00, "selective yellow"),
    NamedColor::new(0xffbcd9, "cotton candy"),
    NamedColor::new(0xffbd88, "macaroni and cheese"),
    NamedColor::new(0xffbf00, "amber"),
    NamedColor::new(0xffc0cb, "pink"),
    NamedColor::new(0xffc40c, "mikado yellow"),
    NamedColor::new(0xffcc33, "sunglow"),
    NamedColor::new(0xffd800, "school bus yellow"),
    NamedColor::new(0xffdab9, "peach puff"),
    NamedColor::new(0xffdae9, "mimi pink"),
    NamedColor::new(0xffdb00, "sizzling sunrise"),
    NamedColor::new(0xffdb58, "mustard"),
    NamedColor::new(0xffddca, "unbleached silk"),
    NamedColor::new(0xffddf4, "pink lace"),
    NamedColor::new(0xffdead, "navajo white"),
    NamedColor::new(0xffdf00, "golden yellow"),
    NamedColor::new(0xffe4c4, "bisque"),
    NamedColor::new(0xffe4e1, "misty rose"),
    NamedColor::new(0xffe5b4, "peach"),
    NamedColor::new(0xffeb00, "middle yellow"),
    NamedColor::new(0xffebcd, "blanched almond"),
    NamedColor::new(0xffefd5, "papaya whip"),
    NamedColor::new(0xfff0f5, "lavender blush"),
    NamedColor::new(0xfff44f, "lemon yellow"),
    NamedColor::new(0xfff5ee, "seashell"),
    NamedColor::new(0xfff600, "cadmium yellow"),
    NamedColor::new(0xfff700, "yellow sunshine"),
    NamedColor::new(0xfff8dc, "cornsilk"),
    NamedColor::new(0xfff8e7, "cosmic latte"),
    NamedColor::new(0xfffacd, "lemon chiffon"),
    NamedColor::new(0xfffaf0, "floral white"),
    NamedColor::new(0xfffafa, "snow"),
    NamedColor::new(0xfffdd0, "cream"),
    NamedColor::new(0xffff00, "yellow"),
    NamedColor::new(0xffff66, "unmellow yellow"),
    NamedColor::new(0xffff99, "canary"),
    NamedColor::new(0xffffe0, "light yellow"),
    NamedColor::new(0xfffff0, "ivory"),
    NamedColor::new(0xffffff, "white"),
];
