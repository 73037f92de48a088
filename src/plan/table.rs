use super::Day;

/// Placeholder entry for days the schedule does not list
const DEFAULT_ENTRY: &str = "Consult full reading plan | Psalm 1";

/// Reading schedule, one pipe-separated entry per day starting at day 1.
/// Days past the end of this table use `DEFAULT_ENTRY`.
static PLAN: &[&str] = &[
    "Genesis 1-2 | Psalm 19",
    "Genesis 3-4 | Psalm 104",
    "Genesis 5-6 | Psalm 136",
    "Genesis 7-9 | Psalm 1",
    "Genesis 10-11 | Psalm 2",
    "Genesis 12-13 | Job 1-2 | Prov 1:1-7",
    "Genesis 14-15 | Job 3-4 | Prov 1:8-19",
    "Genesis 16-17 | Job 5-6 | Prov 1:20-33",
    "Genesis 18-19 | Job 7-8 | Prov 2:1-5",
    "Genesis 20-21 | Job 9-10 | Prov 2:6-8",
    "Genesis 22-23 | Job 11-12 | Prov 2:9-15",
    "Genesis 24 | Job 13-14 | Prov 2:16-19",
    "Genesis 25-26 | Job 15-16 | Prov 2:20-22",
    "Genesis 27-28 | Job 17-18 | Prov 3:1-4",
    "Genesis 29-30 | Job 19-20 | Prov 3:5-8",
    "Genesis 31-32 | Job 21-22 | Prov 3:9-12",
    "Genesis 33-34 | Job 23-24 | Prov 3:13-18",
    "Genesis 35-36 | Job 25-26 | Prov 3:19-24",
    "Genesis 37 | Job 27-28 | Prov 3:25-27",
    "Genesis 38 | Job 29-30 | Prov 3:28-32",
    "Genesis 39-40 | Job 31-32 | Prov 3:33-35",
    "Genesis 41-42 | Job 33-34 | Prov 4:1-9",
    "Genesis 43-44 | Job 35-36 | Prov 4:10-19",
    "Genesis 45-46 | Job 37-38 | Prov 4:20-27",
    "Genesis 47-48 | Job 39-40 | Psalm 16",
    "Genesis 49-50 | Job 41-42 | Psalm 17",
    "Exodus 1-2 | Leviticus 1 | Psalm 44",
    "Exodus 3 | Leviticus 2-3 | Psalm 45",
    "Exodus 4-5 | Leviticus 4 | Psalm 46",
    "Exodus 6-7 | Leviticus 5 | Psalm 47",
    "Exodus 8 | Leviticus 6 | Psalm 48",
    // February
    "Exodus 9 | Leviticus 7 | Psalm 49",
    "Exodus 10-11 | Leviticus 8 | Psalm 50",
    "Exodus 12 | Leviticus 9 | Psalm 114",
    "Exodus 13-14 | Leviticus 10 | Psalm 53",
    "Exodus 15-16 | Leviticus 11 | Psalm 71",
    "Exodus 17-18 | Leviticus 12 | Psalm 73",
    "Exodus 19-20 | Leviticus 13 | Psalm 74",
    "Exodus 21 | Leviticus 14 | Psalm 75",
    "Exodus 22 | Leviticus 15 | Psalm 76",
    "Exodus 23 | Leviticus 16 | Psalm 77",
    "Exodus 24 | Leviticus 17-18 | Psalm 78",
    "Exodus 25-26 | Leviticus 19 | Psalm 79",
    "Exodus 27-28 | Leviticus 20 | Psalm 119:1-88",
    "Exodus 29 | Leviticus 21 | Psalm 119:89-176",
    "Exodus 30-31 | Leviticus 22 | Psalm 115",
    "Exodus 32 | Leviticus 23 | Psalm 80",
    "Exodus 33-34 | Leviticus 24 | Psalm 81",
    "Exodus 35-36 | Leviticus 25 | Psalm 82",
    "Exodus 37-38 | Leviticus 26 | Psalm 83",
    "Exodus 39-40 | Leviticus 27 | Psalm 84",
    "Numbers 1 | Deuteronomy 1 | Psalm 85",
    "Numbers 2 | Deuteronomy 2 | Psalm 87",
    "Numbers 3 | Deuteronomy 3 | Psalm 88",
    "Numbers 4 | Deuteronomy 4 | Psalm 89",
    "Numbers 5 | Deuteronomy 5 | Psalm 90",
    "Numbers 6 | Deuteronomy 6 | Psalm 91",
    "Numbers 7 | Deuteronomy 7 | Psalm 92",
    "Numbers 8-9 | Deuteronomy 8 | Psalm 93",
    // March
    "Numbers 10 | Deuteronomy 9 | Psalm 10",
    "Numbers 11 | Deuteronomy 10 | Psalm 33",
    "Numbers 12-13 | Deuteronomy 11 | Psalm 94",
    "Numbers 14 | Deuteronomy 12 | Psalm 95",
    "Numbers 15 | Deuteronomy 13-14 | Psalm 96",
    "Numbers 16 | Deuteronomy 15-16 | Psalm 97",
    "Numbers 17 | Deuteronomy 17-18 | Psalm 98",
    "Numbers 18 | Deuteronomy 19-20 | Psalm 99",
    "Numbers 19-20 | Deuteronomy 21 | Psalm 100",
    "Numbers 21 | Deuteronomy 22 | Psalm 102",
    "Numbers 22 | Deuteronomy 23 | Psalm 105",
    "Numbers 23 | Deuteronomy 24-25 | Psalm 106",
    "Numbers 24-25 | Deuteronomy 26 | Psalm 107",
    "Numbers 26 | Deuteronomy 27 | Psalm 111",
    "Numbers 27-28 | Deuteronomy 28 | Psalm 112",
    "Numbers 29-30 | Deuteronomy 29 | Psalm 113",
    "Numbers 31 | Deuteronomy 30 | Psalm 116",
    "Numbers 32 | Deuteronomy 31 | Psalm 117",
    "Numbers 33 | Deuteronomy 32 | Psalm 118",
    "Numbers 34 | Deuteronomy 33 | Psalm 120",
    "Numbers 35-36 | Deuteronomy 34 | Psalm 121",
    "Joshua 1-4 | Psalm 123",
    "Joshua 5-7 | Psalm 125",
    "Joshua 8-9 | Psalm 126",
    "Joshua 10-11 | Psalm 128",
    "Joshua 12-14 | Psalm 129",
    "Joshua 15-18 | Psalm 130",
    "Joshua 19-21 | Psalm 131",
    "Joshua 22-24 | Psalm 132",
    "Judges 1-3 | Ruth 1 | Psalm 133",
    "Judges 4-5 | Ruth 2 | Psalm 134",
];

/// Returns the raw schedule entry for `day`
pub(super) fn entry_for(day: Day) -> &'static str {
    PLAN.get(usize::from(day.get()) - 1)
        .copied()
        .unwrap_or(DEFAULT_ENTRY)
}
