//! Critical values of the dip under the uniform null
//!
//! `CRITICAL_VALUES[i][j]` is the `SIGNIFICANCE_LEVELS[j]` quantile of the dip
//! of `SAMPLE_SIZES[i]` independent uniform draws. The uniform distribution is
//! the least favourable unimodal null, so these quantiles calibrate the test
//! for any unimodal alternative. Rows were produced by Monte Carlo simulation
//! of the same algorithm as [`crate::dip`], with between 2 500 (n = 72 000) and
//! 2 000 000 (n <= 10) replicates per row. The first column is the smallest
//! attainable dip `1 / (2n)`, the last the largest simulated value.
//!
//! `sqrt(n) * dip` is close to stationary in `n`, which is what makes linear
//! interpolation between rows on that scale reasonable.

/// Sample sizes with a tabulated row
pub const SAMPLE_SIZES: [usize; 21] = [
    4, 5, 6, 7, 8, 9, 10, 15, 20, 30, 50, 100, 200, 500, 1000, 2000, 5000, 10000, 20000, 40000,
    72000,
];

/// Quantile levels of the columns
pub const SIGNIFICANCE_LEVELS: [f64; 26] = [
    0.0, 0.01, 0.02, 0.05, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.95, 0.98, 0.99, 0.995,
    0.998, 0.999, 0.9995, 0.9998, 0.9999, 0.99995, 0.99998, 0.99999, 1.0,
];

pub const CRITICAL_VALUES: [[f64; 26]; 21] = [
    // n = 4
    [
        0.1250000000, 0.1250000000, 0.1250000000, 0.1250000000, 0.1250000000,
        0.1250000000, 0.1250000000, 0.1250000000, 0.1250000000, 0.1250000000,
        0.1325452612, 0.1572762681, 0.1874296843, 0.2072265718, 0.2236349686,
        0.2316318963, 0.2371913892, 0.2420007500, 0.2443651429, 0.2460276029,
        0.2474557372, 0.2481706722, 0.2487353456, 0.2491412899, 0.2493974527,
        0.2498022635,
    ],
    // n = 5
    [
        0.1000000000, 0.1000000000, 0.1000000000, 0.1000000000, 0.1000000000,
        0.1000000000, 0.1000000000, 0.1087520405, 0.1216493502, 0.1343687621,
        0.1473671936, 0.1610939340, 0.1767984605, 0.1863824716, 0.1935835180,
        0.1965290254, 0.1981837966, 0.1992483895, 0.1996203021, 0.1998122070,
        0.1999279987, 0.1999651056, 0.1999806394, 0.1999906694, 0.1999960805,
        0.1999998717,
    ],
    // n = 6
    [
        0.0833333333, 0.0833333333, 0.0833333333, 0.0833333333, 0.0833333333,
        0.0923449529, 0.1038319752, 0.1138455228, 0.1230458221, 0.1318496512,
        0.1405169482, 0.1493951266, 0.1591354873, 0.1647694062, 0.1792997259,
        0.1922036911, 0.2024974869, 0.2131989169, 0.2197155819, 0.2248926494,
        0.2302501204, 0.2334164715, 0.2356845093, 0.2385402797, 0.2403005420,
        0.2479306516,
    ],
    // n = 7
    [
        0.0714285714, 0.0714285714, 0.0714285714, 0.0727344786, 0.0818043772,
        0.0941181501, 0.1033012431, 0.1109825417, 0.1178348304, 0.1242481490,
        0.1304433959, 0.1366659305, 0.1443707874, 0.1600178566, 0.1753947678,
        0.1840825591, 0.1909970787, 0.1981303214, 0.2021118885, 0.2052448082,
        0.2084237695, 0.2101854883, 0.2113119208, 0.2122469478, 0.2128003671,
        0.2140510322,
    ],
    // n = 8
    [
        0.0625000000, 0.0625000000, 0.0657657690, 0.0739334675, 0.0820331647,
        0.0923277520, 0.0996929989, 0.1057448888, 0.1110469591, 0.1159093671,
        0.1205608910, 0.1255108092, 0.1418366900, 0.1540191839, 0.1660026320,
        0.1730004234, 0.1787910063, 0.1864030172, 0.1943371034, 0.2013669131,
        0.2091037723, 0.2141294432, 0.2190990839, 0.2232789121, 0.2266295345,
        0.2331708573,
    ],
    // n = 9
    [
        0.0555555556, 0.0613706445, 0.0658711975, 0.0733475056, 0.0803742641,
        0.0890389382, 0.0950711182, 0.0999382219, 0.1041526468, 0.1080055456,
        0.1125383474, 0.1228845236, 0.1363843026, 0.1465734847, 0.1570732497,
        0.1641532273, 0.1724490273, 0.1820698659, 0.1880948954, 0.1934591857,
        0.1989975368, 0.2029882577, 0.2061697436, 0.2089677999, 0.2120624794,
        0.2198567264,
    ],
    // n = 10
    [
        0.0500000000, 0.0609560435, 0.0651591169, 0.0718588559, 0.0780129310,
        0.0853091105, 0.0903188203, 0.0943232827, 0.0977795612, 0.1021757602,
        0.1099528511, 0.1187969712, 0.1304666477, 0.1396490273, 0.1508368648,
        0.1595663206, 0.1669814626, 0.1754107757, 0.1806770735, 0.1854647369,
        0.1914085143, 0.1961627078, 0.2012730707, 0.2062526076, 0.2089261315,
        0.2200738654,
    ],
    // n = 15
    [
        0.0333333333, 0.0546254442, 0.0572347660, 0.0610083259, 0.0642722124,
        0.0692525736, 0.0745631634, 0.0792041565, 0.0836270316, 0.0881229386,
        0.0931029260, 0.0995492756, 0.1099328725, 0.1185176518, 0.1286782785,
        0.1357651642, 0.1420145892, 0.1493244653, 0.1545324979, 0.1595800850,
        0.1655418090, 0.1698433458, 0.1733817019, 0.1787370310, 0.1815661452,
        0.2049326149,
    ],
    // n = 20
    [
        0.0250000000, 0.0474329033, 0.0490914302, 0.0527008133, 0.0568137440,
        0.0620432160, 0.0660404979, 0.0696424667, 0.0733389113, 0.0776620646,
        0.0824960671, 0.0883808588, 0.0972026328, 0.1051366028, 0.1143670556,
        0.1207026070, 0.1264501358, 0.1336673257, 0.1385170534, 0.1434059060,
        0.1493001374, 0.1527670071, 0.1569664268, 0.1626052120, 0.1652314243,
        0.1744516044,
    ],
    // n = 30
    [
        0.0166666667, 0.0396340529, 0.0414894849, 0.0444893069, 0.0474350823,
        0.0516732182, 0.0551197477, 0.0582934189, 0.0614982515, 0.0649530024,
        0.0689533874, 0.0739461718, 0.0815171499, 0.0881943482, 0.0960906487,
        0.1016075808, 0.1066602535, 0.1127312399, 0.1171454832, 0.1211749482,
        0.1259965285, 0.1296990356, 0.1338958845, 0.1402514408, 0.1432513712,
        0.1638461489,
    ],
    // n = 50
    [
        0.0100000000, 0.0314489425, 0.0329108781, 0.0353143555, 0.0377143133,
        0.0410626421, 0.0437554004, 0.0462841960, 0.0488558800, 0.0516145597,
        0.0547927292, 0.0588198118, 0.0648782784, 0.0702535886, 0.0766360661,
        0.0810286209, 0.0852013977, 0.0901802412, 0.0937128569, 0.0969751856,
        0.1012863215, 0.1039766969, 0.1069404221, 0.1106011754, 0.1129115641,
        0.1250973972,
    ],
    // n = 100
    [
        0.0050000000, 0.0228597504, 0.0239121054, 0.0256557040, 0.0274187101,
        0.0298167267, 0.0317763555, 0.0336144526, 0.0354648727, 0.0374694555,
        0.0397743199, 0.0426958318, 0.0470994751, 0.0510470802, 0.0557251809,
        0.0590252532, 0.0620575137, 0.0659059214, 0.0684318689, 0.0707628505,
        0.0744302380, 0.0764147987, 0.0786423341, 0.0806541956, 0.0825699121,
        0.0939203180,
    ],
    // n = 200
    [
        0.0025000000, 0.0164627698, 0.0172123334, 0.0184998523, 0.0197513732,
        0.0214841959, 0.0229059567, 0.0242186582, 0.0255659667, 0.0270155897,
        0.0286816146, 0.0307840013, 0.0339969439, 0.0368725720, 0.0403215315,
        0.0427180439, 0.0450282742, 0.0477475374, 0.0497237118, 0.0514885343,
        0.0544517185, 0.0564850086, 0.0577804071, 0.0595214345, 0.0625443085,
        0.0627777661,
    ],
    // n = 500
    [
        0.0010000000, 0.0106503989, 0.0111309752, 0.0119352270, 0.0127479304,
        0.0138564582, 0.0147696409, 0.0156125823, 0.0164766242, 0.0174052145,
        0.0184702271, 0.0198263709, 0.0218794206, 0.0237349325, 0.0258946908,
        0.0274001690, 0.0289327957, 0.0308302941, 0.0322449695, 0.0335923554,
        0.0354794182, 0.0367068391, 0.0379244905, 0.0392150734, 0.0398819900,
        0.0419158116,
    ],
    // n = 1000
    [
        0.0005000000, 0.0076017732, 0.0079434182, 0.0085151540, 0.0090871639,
        0.0098910113, 0.0105402266, 0.0111354252, 0.0117434477, 0.0124067404,
        0.0131658623, 0.0141397747, 0.0156169641, 0.0169525845, 0.0184791615,
        0.0195374335, 0.0205942641, 0.0219268746, 0.0227485000, 0.0233966723,
        0.0243365056, 0.0253984557, 0.0262213525, 0.0266460480, 0.0277855996,
        0.0300093365,
    ],
    // n = 2000
    [
        0.0002500000, 0.0054307560, 0.0056844719, 0.0060749617, 0.0064726340,
        0.0070404500, 0.0074995302, 0.0079299520, 0.0083645853, 0.0088455004,
        0.0093882040, 0.0100747286, 0.0111210018, 0.0120311714, 0.0131773835,
        0.0139637104, 0.0146383626, 0.0155160932, 0.0160462362, 0.0167465558,
        0.0175880164, 0.0181180528, 0.0183586550, 0.0190779226, 0.0191490861,
        0.0192202496,
    ],
    // n = 5000
    [
        0.0001000000, 0.0034580941, 0.0036119339, 0.0038698399, 0.0041255086,
        0.0044721944, 0.0047568561, 0.0050289208, 0.0053007564, 0.0056036133,
        0.0059479079, 0.0063855207, 0.0070360965, 0.0076297490, 0.0083447006,
        0.0088872267, 0.0092791466, 0.0097865060, 0.0102613696, 0.0105705309,
        0.0110758014, 0.0115189449, 0.0115747059, 0.0127935057, 0.0131997723,
        0.0136060389,
    ],
    // n = 10000
    [
        0.0000500000, 0.0024313607, 0.0025655888, 0.0027475575, 0.0029304353,
        0.0031784028, 0.0033885486, 0.0035846128, 0.0037812637, 0.0039951878,
        0.0042324563, 0.0045410654, 0.0050221910, 0.0054369866, 0.0059581066,
        0.0062910681, 0.0065891671, 0.0071834954, 0.0074287791, 0.0075702882,
        0.0076449022, 0.0077105233, 0.0077461581, 0.0077675390, 0.0077746660,
        0.0077817930,
    ],
    // n = 20000
    [
        0.0000250000, 0.0017192971, 0.0017949810, 0.0019320244, 0.0020699642,
        0.0022479125, 0.0023936705, 0.0025291917, 0.0026638025, 0.0027973040,
        0.0029718291, 0.0031774273, 0.0035284412, 0.0038279458, 0.0042013511,
        0.0044656411, 0.0046462765, 0.0048793594, 0.0050683072, 0.0053000497,
        0.0054899128, 0.0059634650, 0.0063126854, 0.0065222177, 0.0065920618,
        0.0066619059,
    ],
    // n = 40000
    [
        0.0000125000, 0.0012332245, 0.0012735544, 0.0013615925, 0.0014614179,
        0.0015885541, 0.0016963533, 0.0017924865, 0.0018930847, 0.0019919528,
        0.0021154923, 0.0022695944, 0.0025294533, 0.0027371162, 0.0029642613,
        0.0031503406, 0.0033219006, 0.0034751106, 0.0036133654, 0.0038424096,
        0.0040278710, 0.0041934430, 0.0042762290, 0.0043259006, 0.0043424578,
        0.0043590150,
    ],
    // n = 72000
    [
        0.0000069444, 0.0009099120, 0.0009553035, 0.0010172398, 0.0010766540,
        0.0011720802, 0.0012517954, 0.0013228958, 0.0013912280, 0.0014749560,
        0.0015698118, 0.0016939907, 0.0018822245, 0.0020292474, 0.0022543661,
        0.0023622715, 0.0024271722, 0.0025153394, 0.0026503673, 0.0027997510,
        0.0028556345, 0.0028647359, 0.0028692866, 0.0028720171, 0.0028729272,
        0.0028738373,
    ],
];

/// Piecewise linear interpolation clamped at both ends
///
/// `xp` must be non-decreasing. On a run of equal abscissae the last one
/// wins, so flat stretches at the bottom of a row map to its highest level.
fn interpolate(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let last = xp.len() - 1;
    if x < xp[0] {
        return fp[0];
    }
    let j = xp.partition_point(|&v| v <= x) - 1;
    if j >= last {
        return fp[last];
    }
    let slope = (fp[j + 1] - fp[j]) / (xp[j + 1] - xp[j]);
    fp[j] + (x - xp[j]) * slope
}

/// P-value of a dip observed on `n` points, read from the critical value table
///
/// The two rows bracketing `n` are blended on the `sqrt(n) * dip` scale and the
/// observed `sqrt(n) * dip` is located in the blended row. Sizes beyond the
/// table use its last row. Samples of fewer than four points are never
/// significant.
///
/// # Examples
///
/// ```rust
/// use dip_stat::table::table_pvalue;
///
/// assert_eq!(table_pvalue(0.0, 3), 1.0);
/// assert!(table_pvalue(0.2, 100) < 1e-3);
/// assert!(table_pvalue(0.02, 100) > 0.9);
/// ```
pub fn table_pvalue(dip: f64, n: usize) -> f64 {
    if n < 4 {
        return 1.0;
    }

    let upper = SAMPLE_SIZES.partition_point(|&size| size < n);
    let lower = upper.saturating_sub(1);
    let upper = upper.min(SAMPLE_SIZES.len() - 1);

    let n0 = SAMPLE_SIZES[lower] as f64;
    let n1 = SAMPLE_SIZES[upper] as f64;
    let weight = if upper == lower {
        0.0
    } else {
        (n as f64 - n0) / (n1 - n0)
    };

    let row0 = &CRITICAL_VALUES[lower];
    let row1 = &CRITICAL_VALUES[upper];
    let (s0, s1) = (n0.sqrt(), n1.sqrt());
    let scaled: Vec<f64> = row0
        .iter()
        .zip(row1)
        .map(|(&c0, &c1)| s0 * c0 + weight * (s1 * c1 - s0 * c0))
        .collect();

    let level = interpolate((n as f64).sqrt() * dip, &scaled, &SIGNIFICANCE_LEVELS);
    (1.0 - level).clamp(0.0, 1.0)
}
