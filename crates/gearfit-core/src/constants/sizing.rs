// ABOUTME: Sizing chart constants for nordic, alpine, snowboard, hockey and helmet recommendations
// ABOUTME: Empirical vendor and industry tables kept as named constants, grouped per sport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gearfit Contributors

/// Shoe size conversion factors (canonical unit: centimeters)
pub mod shoe_size {
    /// Millimeters per centimeter, for mondopoint
    pub const MONDOPOINT_PER_CM: f64 = 10.0;
    /// EU size = (cm + `EU_CM_OFFSET`) * `EU_SCALE`
    pub const EU_SCALE: f64 = 1.5;
    /// EU centimeter offset
    pub const EU_CM_OFFSET: f64 = 1.5;
    /// UK/US sizes grow by one size per third of a centimeter
    pub const ANGLO_SIZES_PER_CM: f64 = 3.0;
    /// Foot length (cm) of UK size 0
    pub const ANGLO_ZERO_CM: f64 = 22.0;
    /// US men's sizes run one size above UK
    pub const US_MEN_OFFSET: f64 = 1.0;
    /// US women's sizes run two and a half sizes above UK
    pub const US_WOMEN_OFFSET: f64 = 2.5;
}

/// Cross-country ski chart
pub mod nordic {
    /// Classic ski length offsets over height (cm)
    pub const CLASSIC_OFFSET_CM: (f64, f64) = (10.0, 20.0);
    /// Skate ski length offsets over height (cm)
    pub const SKATE_OFFSET_CM: (f64, f64) = (5.0, 15.0);
    /// Combi ski length offsets over height (cm)
    pub const COMBI_OFFSET_CM: (f64, f64) = (5.0, 10.0);

    /// Position of the recommended length inside the band, per skill tier
    pub const SKILL_BAND_POSITION: [f64; 4] = [0.1, 0.3, 0.7, 0.9];

    /// Classic pole multipliers of height
    pub const CLASSIC_POLE_MULTIPLIER: (f64, f64) = (0.83, 0.85);
    /// Skate pole multipliers of height
    pub const SKATE_POLE_MULTIPLIER: (f64, f64) = (0.88, 0.90);
    /// Combi pole multipliers of height
    pub const COMBI_POLE_MULTIPLIER: (f64, f64) = (0.86, 0.88);
    /// Raise of the lower pole multiplier per skill tier
    pub const POLE_NARROWING_PER_TIER: f64 = 0.005;

    /// Weight above which skis are lengthened (kg)
    pub const HEAVY_WEIGHT_KG: f64 = 80.0;
    /// Weight below which skis are shortened (kg)
    pub const LIGHT_WEIGHT_KG: f64 = 60.0;

    /// Fischer FA value multipliers of body weight, classic
    pub const FISCHER_FA_CLASSIC: (f64, f64) = (0.85, 0.95);
    /// Fischer FA value multipliers of body weight, skate
    pub const FISCHER_FA_SKATE: (f64, f64) = (0.80, 0.90);
    /// Fischer FA value multipliers of body weight, combi
    pub const FISCHER_FA_COMBI: (f64, f64) = (0.80, 0.95);
}

/// Alpine ski and boot chart
pub mod alpine {
    /// Ski length offsets below height (min, max) per skill tier (cm)
    pub const SKILL_OFFSETS_CM: [(f64, f64); 4] =
        [(-20.0, -15.0), (-17.0, -10.0), (-14.0, -7.0), (-10.0, -5.0)];
    /// Female ski length offset, both bounds (cm)
    pub const FEMALE_OFFSET_CM: f64 = -3.0;
    /// Weight above which the max bound grows (kg)
    pub const HEAVY_WEIGHT_KG: f64 = 85.0;
    /// Weight below which the max bound shrinks (kg)
    pub const LIGHT_WEIGHT_KG: f64 = 55.0;
    /// Max bound weight adjustment (cm)
    pub const WEIGHT_ADJUSTMENT_CM: f64 = 3.0;

    /// Groomed terrain waist width band (mm)
    pub const WAIST_GROOMED_MM: (u32, u32) = (65, 80);
    /// All-mountain waist width band (mm)
    pub const WAIST_ALL_MOUNTAIN_MM: (u32, u32) = (80, 96);
    /// Powder waist width band (mm)
    pub const WAIST_POWDER_MM: (u32, u32) = (96, 120);

    /// DIN base setting by upper weight bound (kg, exclusive)
    pub const DIN_WEIGHT_TABLE: [(f64, f64); 7] = [
        (30.0, 1.5),
        (40.0, 2.0),
        (50.0, 3.0),
        (60.0, 4.0),
        (70.0, 5.0),
        (80.0, 6.0),
        (90.0, 7.0),
    ];
    /// DIN base setting for skiers at or above the last table bound
    pub const DIN_HEAVIEST: f64 = 8.0;
    /// Height at or above which DIN increases (cm)
    pub const DIN_TALL_HEIGHT_CM: f64 = 180.0;
    /// Height below which DIN decreases (cm)
    pub const DIN_SHORT_HEIGHT_CM: f64 = 140.0;
    /// DIN height adjustment
    pub const DIN_HEIGHT_ADJUSTMENT: f64 = 0.5;
    /// DIN adjustment per skill tier
    pub const DIN_SKILL_ADJUSTMENT: [f64; 4] = [-1.0, 0.0, 1.5, 2.5];
    /// Lowest DIN setting produced
    pub const DIN_MIN: f64 = 1.0;
    /// Highest DIN setting produced
    pub const DIN_MAX: f64 = 12.0;
    /// Half-width of the DIN range around the recommendation
    pub const DIN_RANGE_SPREAD: f64 = 1.0;

    /// Estimation offset added to measured foot width (mm)
    pub const LAST_WIDTH_OFFSET_MM: f64 = 1.0;
    /// Last widths below this are narrow (mm)
    pub const LAST_NARROW_BELOW_MM: u32 = 98;
    /// Last widths up to this are medium (mm)
    pub const LAST_MEDIUM_MAX_MM: u32 = 101;
    /// Last widths up to this are wide, above is extra wide (mm)
    pub const LAST_WIDE_MAX_MM: u32 = 104;

    /// Boot flex band per skill tier
    pub const FLEX_BY_SKILL: [(u32, u32); 4] = [(60, 80), (80, 100), (100, 120), (120, 140)];
    /// Flex adjustment for light or heavy skiers and for female gender
    pub const FLEX_ADJUSTMENT: i32 = 10;
    /// Weight below which flex softens (kg)
    pub const FLEX_LIGHT_WEIGHT_KG: f64 = 60.0;
    /// Weight above which flex stiffens (kg)
    pub const FLEX_HEAVY_WEIGHT_KG: f64 = 85.0;
}

/// Snowboard chart
pub mod snowboard {
    /// Board length offset below height (cm)
    pub const LENGTH_OFFSET_CM: f64 = -25.0;
    /// Width of the board length range (cm)
    pub const LENGTH_SPAN_CM: f64 = 10.0;
    /// Recommended length bonus above the base, per skill tier (cm)
    pub const SKILL_BONUS_CM: [f64; 4] = [2.0, 4.0, 6.0, 8.0];
    /// Weight buckets: (upper bound kg, adjustment cm), upper bound exclusive
    pub const WEIGHT_BUCKETS: [(f64, f64); 2] = [(55.0, -5.0), (65.0, -2.0)];
    /// Riders up to this weight get no adjustment (kg, inclusive)
    pub const NEUTRAL_WEIGHT_MAX_KG: f64 = 80.0;
    /// Adjustment above the neutral bucket (cm)
    pub const HEAVY_ADJUSTMENT_CM: f64 = 3.0;
    /// Waist width minimum by boot mondopoint: (upper bound exclusive, min waist mm)
    pub const WAIST_BY_MONDOPOINT: [(u32, u32); 3] = [(260, 245), (275, 250), (290, 255)];
    /// Waist width minimum for the largest boots (mm)
    pub const WAIST_LARGEST_MM: u32 = 260;
    /// Stance width as a fraction of height
    pub const STANCE_HEIGHT_RATIO: f64 = 0.30;
    /// Stance spread either side of the recommendation (cm)
    pub const STANCE_SPREAD_CM: f64 = 4.0;
}

/// Hockey skate chart
pub mod hockey {
    /// Bauer skates run this many sizes below US shoe size
    pub const BAUER_SIZE_OFFSET: f64 = 1.0;
    /// CCM skates run this many sizes below US shoe size
    pub const CCM_SIZE_OFFSET: f64 = 1.5;
    /// Bauer width codes: narrow, medium, wide
    pub const BAUER_WIDTH_CODES: [&str; 3] = ["C", "D", "EE"];
    /// CCM width codes: narrow, medium, wide
    pub const CCM_WIDTH_CODES: [&str; 3] = ["C", "R", "W"];
}

/// Helmet chart: (upper bound cm exclusive, label, range min, range max)
pub mod helmet {
    /// Size buckets by head circumference
    pub const SIZE_TABLE: [(f64, &str, u32, u32); 5] = [
        (55.0, "XS", 51, 54),
        (57.0, "S", 55, 56),
        (59.0, "M", 57, 58),
        (61.0, "L", 59, 60),
        (63.0, "XL", 61, 62),
    ];
    /// Largest helmet size
    pub const LARGEST: (&str, u32, u32) = ("XXL", 63, 65);
}
