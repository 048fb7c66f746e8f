//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDownWideNarrow as SortDesc, LuArrowUpNarrowWide as SortAsc, LuCheck as Check,
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuCopy as Copy,
        LuDownload as Download, LuEllipsisVertical as More, LuExternalLink as ExternalLink,
        LuEye as Eye, LuFile as File, LuFlag as Flag, LuLink as Link, LuPin as Pin,
        LuPin as PinFill, LuSearch as Search, LuShare2 as Share, LuStar as Star,
        LuStar as StarFill, LuTrash2 as Trash, LuUser as User, LuUsers as People, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsCheckLg as Check, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsClipboard as Copy, BsDownload as Download,
        BsEye as Eye, BsFileEarmark as File, BsFlagFill as Flag, BsLink45deg as Link,
        BsPeople as People, BsPerson as User, BsPin as Pin, BsPinFill as PinFill,
        BsSearch as Search, BsShare as Share, BsSortDown as SortDesc, BsSortUp as SortAsc,
        BsStar as Star, BsStarFill as StarFill, BsThreeDotsVertical as More, BsTrash as Trash,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FILE, File);
themed_icon!(SEARCH, Search);
themed_icon!(SORT_ASC, SortAsc);
themed_icon!(SORT_DESC, SortDesc);
themed_icon!(MORE, More);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(SHARE, Share);
themed_icon!(LINK, Link);
themed_icon!(DOWNLOAD, Download);
themed_icon!(EYE, Eye);
themed_icon!(COPY, Copy);
themed_icon!(CHECK, Check);
themed_icon!(TRASH, Trash);
themed_icon!(FLAG, Flag);
themed_icon!(STAR, Star);
themed_icon!(STAR_FILL, StarFill);
themed_icon!(PIN, Pin);
themed_icon!(PIN_FILL, PinFill);
themed_icon!(USER, User);
themed_icon!(PEOPLE, People);
