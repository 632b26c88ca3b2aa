//! Literal geometry for the campus map.
//!
//! Building outlines are stored once per footprint point; the `*_VERTEX_ORDER`
//! tables expand them into the per-face vertex list the triangles index into,
//! so every wall gets its own vertices and shades flat.

/// Island shoreline as a closed polyline at sea level.
pub(crate) const ISLAND_BOUNDARY: &[[f32; 3]] = &[
    [1.03208, 0.86614, 0.0],
    [1.39635, 1.87327, 0.0],
    [1.40699, 1.89816, 0.0],
    [1.42827, 1.94451, 0.0],
    [1.50805, 1.93163, 0.0],
    [1.50945, 1.94805, 0.0],
    [1.47155, 1.95470, 0.0],
    [1.47585, 1.97181, 0.0],
    [1.48250, 1.99112, 0.0],
    [1.49959, 2.01151, 0.0],
    [1.49200, 2.04477, 0.0],
    [1.49959, 2.07159, 0.0],
    [1.52429, 2.11879, 0.0],
    [1.53474, 2.15098, 0.0],
    [1.54993, 2.19282, 0.0],
    [1.57463, 2.21857, 0.0],
    [1.60787, 2.22286, 0.0],
    [1.60312, 2.24969, 0.0],
    [1.61737, 2.28080, 0.0],
    [1.62912, 2.25918, 0.0],
    [1.63570, 2.27410, 0.0],
    [1.58099, 2.32817, 0.0],
    [1.73904, 2.76162, 0.0],
    [1.85439, 3.12160, 0.0],
    [1.82015, 3.12898, 0.0],
    [1.81125, 3.11369, 0.0],
    [1.74289, 3.06602, 0.0],
    [1.58731, 3.07455, 0.0],
    [1.52083, 3.05846, 0.0],
    [1.38387, 3.05851, 0.0],
    [1.31264, 3.08636, 0.0],
    [1.23457, 3.06234, 0.0],
    [1.17475, 2.99287, 0.0],
    [1.13590, 2.81956, 0.0],
    [1.13203, 2.81353, 0.0],
    [1.12600, 2.80412, 0.0],
    [1.07980, 2.77630, 0.0],
    [1.01499, 2.76485, 0.0],
    [0.93654, 2.71044, 0.0],
    [0.85766, 2.59042, 0.0],
    [0.85769, 2.55099, 0.0],
    [0.83339, 2.50518, 0.0],
    [0.79312, 2.47736, 0.0],
    [0.82043, 2.56613, 0.0],
    [0.79637, 2.57966, 0.0],
    [0.84638, 2.65047, 0.0],
    [0.80675, 2.65496, 0.0],
    [0.75282, 2.61910, 0.0],
    [0.74458, 2.60303, 0.0],
    [0.72917, 2.57274, 0.0],
    [0.72973, 2.56101, 0.0],
    [0.73193, 2.54802, 0.0],
    [0.73248, 2.52267, 0.0],
    [0.72807, 2.49980, 0.0],
    [0.72258, 2.47879, 0.0],
    [0.72203, 2.46024, 0.0],
    [0.72092, 2.43922, 0.0],
    [0.71817, 2.43427, 0.0],
    [0.71818, 2.43181, 0.0],
    [0.72038, 2.42624, 0.0],
    [0.71928, 2.41882, 0.0],
    [0.72094, 2.40275, 0.0],
    [0.72038, 2.39657, 0.0],
    [0.71872, 2.39100, 0.0],
    [0.71323, 2.38112, 0.0],
    [0.71212, 2.37802, 0.0],
    [0.71213, 2.37370, 0.0],
    [0.71983, 2.36567, 0.0],
    [0.73084, 2.34155, 0.0],
    [0.74569, 2.31622, 0.0],
    [0.75944, 2.28098, 0.0],
    [0.78310, 2.23895, 0.0],
    [0.83702, 2.16292, 0.0],
    [0.85847, 2.13016, 0.0],
    [0.86014, 2.12645, 0.0],
    [0.86014, 2.11841, 0.0],
    [0.85737, 2.11224, 0.0],
    [0.85682, 2.10421, 0.0],
    [0.85847, 2.09741, 0.0],
    [0.86179, 2.08874, 0.0],
    [0.87608, 2.06217, 0.0],
    [0.88323, 2.04177, 0.0],
    [0.88929, 2.03002, 0.0],
    [0.91404, 1.99974, 0.0],
    [0.92009, 1.99479, 0.0],
    [0.93825, 1.98923, 0.0],
    [0.95420, 1.98861, 0.0],
    [0.96686, 1.99170, 0.0],
    [0.97016, 1.99046, 0.0],
    [0.98061, 1.97934, 0.0],
    [0.99436, 1.96760, 0.0],
    [1.00041, 1.96017, 0.0],
    [1.01472, 1.93916, 0.0],
    [1.02847, 1.91505, 0.0],
    [1.04498, 1.90269, 0.0],
    [1.06808, 1.87240, 0.0],
    [1.08899, 1.83964, 0.0],
    [1.11760, 1.78092, 0.0],
    [1.14291, 1.71787, 0.0],
    [1.16161, 1.67768, 0.0],
    [1.17756, 1.64678, 0.0],
    [1.19131, 1.61587, 0.0],
    [1.19077, 1.61030, 0.0],
    [1.18802, 1.60907, 0.0],
    [1.17590, 1.59547, 0.0],
    [1.14071, 1.57940, 0.0],
    [1.13520, 1.57198, 0.0],
    [1.14070, 1.56147, 0.0],
    [1.14841, 1.55529, 0.0],
    [1.16161, 1.54787, 0.0],
    [1.17371, 1.54170, 0.0],
    [1.19076, 1.53365, 0.0],
    [1.20012, 1.53180, 0.0],
    [1.20177, 1.52438, 0.0],
    [1.19627, 1.52315, 0.0],
    [1.17866, 1.52500, 0.0],
    [1.15776, 1.53242, 0.0],
    [1.13355, 1.54231, 0.0],
    [1.12035, 1.55282, 0.0],
    [1.10824, 1.55282, 0.0],
    [1.08404, 1.55962, 0.0],
    [1.07469, 1.57137, 0.0],
    [1.07359, 1.58806, 0.0],
    [1.08349, 1.61340, 0.0],
    [1.07964, 1.61650, 0.0],
    [1.05543, 1.61092, 0.0],
    [1.04333, 1.59609, 0.0],
    [1.03728, 1.56765, 0.0],
    [1.03727, 1.53922, 0.0],
    [1.04223, 1.50274, 0.0],
    [1.04278, 1.47988, 0.0],
    [1.05213, 1.44217, 0.0],
    [1.05708, 1.42734, 0.0],
    [1.05818, 1.39890, 0.0],
    [1.06478, 1.37727, 0.0],
    [1.06588, 1.35810, 0.0],
    [1.06918, 1.33400, 0.0],
    [1.07028, 1.30803, 0.0],
    [1.07578, 1.28825, 0.0],
    [1.08459, 1.28084, 0.0],
    [1.08515, 1.29258, 0.0],
    [1.08018, 1.32163, 0.0],
    [1.07523, 1.35625, 0.0],
    [1.07248, 1.38220, 0.0],
    [1.07154, 1.38510, 0.0],
    [1.06865, 1.39395, 0.0],
    [1.06836, 1.40368, 0.0],
    [1.06808, 1.41313, 0.0],
    [1.08074, 1.42116, 0.0],
    [1.08404, 1.42116, 0.0],
    [1.08679, 1.41930, 0.0],
    [1.11595, 1.37541, 0.0],
    [1.12034, 1.36738, 0.0],
    [1.12199, 1.36058, 0.0],
    [1.12199, 1.35254, 0.0],
    [1.12034, 1.34450, 0.0],
    [1.11814, 1.33709, 0.0],
    [1.12364, 1.31422, 0.0],
    [1.12310, 1.30000, 0.0],
    [1.12089, 1.29381, 0.0],
    [1.11429, 1.28701, 0.0],
    [1.10714, 1.28145, 0.0],
    [1.10329, 1.28145, 0.0],
    [1.10109, 1.28393, 0.0],
    [1.09724, 1.29753, 0.0],
    [1.09613, 1.29814, 0.0],
    [1.09338, 1.29691, 0.0],
    [1.09173, 1.27712, 0.0],
    [1.09119, 1.22706, 0.0],
    [1.08458, 1.19305, 0.0],
    [1.07742, 1.17823, 0.0],
    [1.06918, 1.16586, 0.0],
    [1.05707, 1.13929, 0.0],
    [1.05102, 1.11888, 0.0],
    [1.04497, 1.10219, 0.0],
    [1.03616, 1.06757, 0.0],
    [1.01691, 1.00700, 0.0],
    [1.00865, 0.99216, 0.0],
    [0.98444, 0.95323, 0.0],
    [0.98334, 0.94767, 0.0],
    [0.98554, 0.92355, 0.0],
    [0.98499, 0.91737, 0.0],
    [0.98169, 0.90996, 0.0],
    [0.97619, 0.90439, 0.0],
    [0.97398, 0.89512, 0.0],
    [0.97784, 0.88338, 0.0],
    [0.98169, 0.87781, 0.0],
    [0.98884, 0.86977, 0.0],
    [1.00094, 0.86297, 0.0],
    [1.02021, 0.85864, 0.0],
    [1.02459, 0.85926, 0.0],
    [1.03208, 0.86614, 0.0],
];

pub(crate) const CUBE_CORNERS: &[[f32; 3]] = &[
    [0.025, 0.025, 0.0],
    [-0.025, 0.025, 0.0],
    [-0.025, -0.025, 0.0],
    [0.025, -0.025, 0.0],
    [0.025, 0.025, 0.05],
    [-0.025, 0.025, 0.05],
    [-0.025, -0.025, 0.05],
    [0.025, -0.025, 0.05],
];

pub(crate) const CUBE_VERTEX_ORDER: &[u32] = &[
    0, 1, 4, 5,
    1, 2, 5, 6,
    2, 3, 6, 7,
    3, 0, 7, 4,
    4, 5, 6, 7,
];

pub(crate) const CUBE_TRIANGLES: &[u32] = &[
    0, 1, 2, 3, 2, 1,
    4, 5, 6, 7, 6, 5,
    8, 9, 10, 11, 10, 9,
    12, 13, 14, 15, 14, 13,
    16, 17, 18, 16, 18, 19,
];

/// ECDC-A outline at ground level (first 40 points) and at roof height.
pub(crate) const ECDC_A_FOOTPRINT: &[[f32; 3]] = &[
    [0.941, 0.233, 0.0],
    [0.922, 0.337, 0.0],
    [0.902, 0.462, 0.0],
    [1.003, 0.468, 0.0],
    [1.003, 0.562, 0.0],
    [1.019, 0.661, 0.0],
    [1.052, 0.748, 0.0],
    [1.096, 0.828, 0.0],
    [1.147, 0.898, 0.0],
    [1.182, 0.933, 0.0],
    [1.159, 0.964, 0.0],
    [1.179, 0.981, 0.0],
    [1.208, 0.962, 0.0],
    [1.208, 0.946, 0.0],
    [1.218, 0.932, 0.0],
    [1.231, 0.931, 0.0],
    [1.244, 0.940, 0.0],
    [1.244, 0.954, 0.0],
    [1.237, 0.965, 0.0],
    [1.222, 0.970, 0.0],
    [1.212, 1.003, 0.0],
    [1.381, 1.112, 0.0],
    [1.320, 1.208, 0.0],
    [1.407, 1.262, 0.0],
    [1.387, 1.292, 0.0],
    [1.301, 1.238, 0.0],
    [1.240, 1.338, 0.0],
    [1.083, 1.240, 0.0],
    [1.146, 1.143, 0.0],
    [1.062, 1.081, 0.0],
    [1.018, 1.128, 0.0],
    [0.979, 1.087, 0.0],
    [0.901, 1.004, 0.0],
    [0.822, 0.886, 0.0],
    [0.766, 0.753, 0.0],
    [0.732, 0.595, 0.0],
    [0.728, 0.448, 0.0],
    [0.751, 0.289, 0.0],
    [0.882, 0.326, 0.0],
    [0.909, 0.226, 0.0],
    [0.941, 0.233, 0.216],
    [0.922, 0.337, 0.216],
    [0.902, 0.462, 0.216],
    [1.003, 0.468, 0.216],
    [1.003, 0.562, 0.216],
    [1.019, 0.661, 0.216],
    [1.052, 0.748, 0.216],
    [1.096, 0.828, 0.216],
    [1.147, 0.898, 0.216],
    [1.182, 0.933, 0.216],
    [1.159, 0.964, 0.216],
    [1.179, 0.981, 0.216],
    [1.208, 0.962, 0.216],
    [1.208, 0.946, 0.216],
    [1.218, 0.932, 0.216],
    [1.231, 0.931, 0.216],
    [1.244, 0.940, 0.216],
    [1.244, 0.954, 0.216],
    [1.237, 0.965, 0.216],
    [1.222, 0.970, 0.216],
    [1.212, 1.003, 0.216],
    [1.381, 1.112, 0.216],
    [1.320, 1.208, 0.216],
    [1.407, 1.262, 0.216],
    [1.387, 1.292, 0.216],
    [1.301, 1.238, 0.216],
    [1.240, 1.338, 0.216],
    [1.083, 1.240, 0.216],
    [1.146, 1.143, 0.216],
    [1.062, 1.081, 0.216],
    [1.018, 1.128, 0.216],
    [0.979, 1.087, 0.216],
    [0.901, 1.004, 0.216],
    [0.822, 0.886, 0.216],
    [0.766, 0.753, 0.216],
    [0.732, 0.595, 0.216],
    [0.728, 0.448, 0.216],
    [0.751, 0.289, 0.216],
    [0.882, 0.326, 0.216],
    [0.909, 0.226, 0.216],
];

pub(crate) const ECDC_A_VERTEX_ORDER: &[u32] = &[
    0, 1, 2, 40, 41, 42, 2, 3,
    42, 43, 3, 4, 5, 6, 7, 8,
    9, 43, 44, 45, 46, 47, 48, 49,
    9, 10, 49, 50, 10, 11, 50, 51,
    11, 12, 51, 52, 12, 13, 14, 15,
    16, 17, 18, 19, 52, 53, 54, 55,
    56, 57, 58, 59, 19, 20, 59, 60,
    20, 21, 60, 61, 21, 22, 61, 62,
    22, 23, 62, 63, 23, 24, 63, 64,
    24, 25, 64, 65, 25, 26, 65, 66,
    26, 27, 66, 67, 27, 28, 67, 68,
    28, 29, 68, 69, 29, 30, 69, 70,
    30, 31, 32, 33, 34, 35, 36, 37,
    70, 71, 72, 73, 74, 75, 76, 77,
    37, 38, 77, 78, 38, 39, 78, 79,
    39, 0, 79, 40, 40, 41, 42, 43,
    44, 45, 46, 47, 48, 49, 50, 51,
    52, 53, 54, 55, 56, 57, 58, 59,
    60, 61, 62, 63, 64, 65, 66, 67,
    68, 69, 70, 71, 72, 73, 74, 75,
    76, 77, 78, 79,
];

pub(crate) const ECDC_A_TRIANGLES: &[u32] = &[
    0, 1, 3, 1, 2, 4,
    4, 3, 1, 5, 4, 2,
    6, 7, 8, 9, 8, 7,
    10, 11, 17, 11, 12, 18,
    12, 13, 19, 13, 14, 20,
    14, 15, 21, 15, 16, 22,
    18, 17, 11, 19, 18, 12,
    20, 19, 13, 21, 20, 14,
    22, 21, 15, 23, 22, 16,
    24, 25, 26, 27, 26, 25,
    28, 29, 30, 31, 30, 29,
    32, 33, 34, 35, 34, 33,
    36, 37, 44, 37, 38, 45,
    38, 39, 46, 39, 40, 47,
    40, 41, 48, 41, 42, 49,
    42, 43, 50, 45, 44, 37,
    46, 45, 38, 47, 46, 39,
    48, 47, 40, 49, 48, 41,
    50, 49, 42, 51, 50, 43,
    52, 53, 54, 55, 54, 53,
    56, 57, 58, 59, 58, 57,
    60, 61, 62, 63, 62, 61,
    64, 65, 66, 67, 66, 65,
    68, 69, 70, 71, 70, 69,
    72, 73, 74, 75, 74, 73,
    76, 77, 78, 79, 78, 77,
    80, 81, 82, 83, 82, 81,
    84, 85, 86, 87, 86, 85,
    88, 89, 90, 91, 90, 89,
    92, 93, 94, 95, 94, 93,
    96, 97, 104, 97, 98, 105,
    98, 99, 106, 99, 100, 107,
    100, 101, 108, 101, 102, 109,
    102, 103, 110, 105, 104, 97,
    106, 105, 98, 107, 106, 99,
    108, 107, 100, 109, 108, 101,
    110, 109, 102, 111, 110, 103,
    112, 113, 114, 115, 114, 113,
    116, 117, 118, 119, 118, 117,
    120, 121, 122, 123, 122, 121,
    124, 125, 162, 162, 163, 124,
    125, 126, 162, 126, 160, 162,
    160, 161, 162, 126, 127, 128,
    126, 128, 159, 159, 160, 126,
    128, 129, 158, 158, 159, 128,
    129, 130, 157, 157, 158, 129,
    130, 131, 156, 156, 157, 130,
    131, 132, 155, 155, 156, 131,
    132, 133, 134, 132, 134, 153,
    132, 153, 155, 153, 154, 155,
    134, 135, 153, 135, 152, 153,
    135, 144, 152, 135, 136, 144,
    136, 143, 144, 136, 137, 143,
    142, 143, 137, 137, 138, 142,
    141, 142, 138, 138, 139, 141,
    140, 141, 139, 144, 145, 152,
    145, 146, 152, 146, 149, 152,
    146, 147, 148, 148, 149, 146,
    149, 150, 151, 149, 151, 152,
];

/// ECDC-B outline at ground level (first 20 points) and at roof height.
pub(crate) const ECDC_B_FOOTPRINT: &[[f32; 3]] = &[
    [0.585, 0.551, 0.0],
    [0.624, 0.561, 0.0],
    [0.660, 0.593, 0.0],
    [0.685, 0.639, 0.0],
    [0.698, 0.638, 0.0],
    [0.714, 0.697, 0.0],
    [0.693, 0.701, 0.0],
    [0.698, 0.726, 0.0],
    [0.677, 0.730, 0.0],
    [0.647, 0.778, 0.0],
    [0.596, 0.807, 0.0],
    [0.590, 0.794, 0.0],
    [0.569, 0.807, 0.0],
    [0.507, 0.786, 0.0],
    [0.462, 0.751, 0.0],
    [0.440, 0.697, 0.0],
    [0.446, 0.638, 0.0],
    [0.478, 0.594, 0.0],
    [0.528, 0.568, 0.0],
    [0.585, 0.570, 0.0],
    [0.585, 0.551, 0.216],
    [0.624, 0.561, 0.216],
    [0.660, 0.593, 0.216],
    [0.685, 0.639, 0.216],
    [0.698, 0.638, 0.216],
    [0.714, 0.697, 0.216],
    [0.693, 0.701, 0.216],
    [0.698, 0.726, 0.216],
    [0.677, 0.730, 0.216],
    [0.647, 0.778, 0.216],
    [0.596, 0.807, 0.216],
    [0.590, 0.794, 0.216],
    [0.569, 0.807, 0.216],
    [0.507, 0.786, 0.216],
    [0.462, 0.751, 0.216],
    [0.440, 0.697, 0.216],
    [0.446, 0.638, 0.216],
    [0.478, 0.594, 0.216],
    [0.528, 0.568, 0.216],
    [0.585, 0.570, 0.216],
];

pub(crate) const ECDC_B_VERTEX_ORDER: &[u32] = &[
    0, 1, 2, 3, 20, 21, 22, 23,
    3, 4, 23, 24, 4, 5, 24, 25,
    5, 6, 25, 26, 6, 7, 26, 27,
    7, 8, 27, 28, 8, 9, 10, 28,
    29, 30, 10, 11, 30, 31, 11, 12,
    31, 32, 12, 13, 14, 15, 16, 17,
    18, 19, 32, 33, 34, 35, 36, 37,
    38, 39, 19, 0, 39, 20, 20, 21,
    22, 23, 24, 25, 26, 27, 28, 29,
    30, 31, 32, 33, 34, 35, 36, 37,
    38, 39,
];

pub(crate) const ECDC_B_TRIANGLES: &[u32] = &[
    0, 1, 5, 5, 4, 0,
    1, 2, 6, 6, 5, 1,
    2, 3, 7, 7, 6, 2,
    8, 9, 10, 11, 10, 9,
    12, 13, 14, 15, 14, 13,
    16, 17, 18, 19, 18, 17,
    20, 21, 22, 23, 22, 21,
    24, 25, 26, 27, 26, 25,
    28, 29, 32, 32, 31, 28,
    29, 30, 33, 33, 32, 29,
    34, 35, 36, 37, 36, 35,
    38, 39, 40, 41, 40, 39,
    42, 43, 51, 51, 50, 42,
    43, 44, 52, 52, 51, 43,
    44, 45, 53, 53, 52, 44,
    45, 46, 54, 54, 53, 45,
    46, 47, 55, 55, 54, 46,
    47, 48, 56, 56, 55, 47,
    48, 49, 57, 57, 56, 48,
    58, 59, 60, 61, 60, 59,
    62, 63, 81, 63, 64, 81,
    64, 65, 81, 65, 79, 81,
    79, 80, 81, 65, 77, 79,
    77, 78, 79, 65, 66, 68,
    66, 67, 68, 65, 70, 77,
    65, 68, 70, 68, 69, 70,
    70, 71, 73, 71, 72, 73,
    70, 73, 75, 73, 74, 75,
    70, 75, 77, 75, 76, 77,
];

/// Bay Hall outline points; the z component carries each storey height.
pub(crate) const BAY_HALL_FOOTPRINT: &[[f32; 3]] = &[
    [-1.499, -1.166, 0.0],
    [-0.888, -1.429, 0.0],
    [-0.755, -1.121, 0.0],
    [-1.356, -0.855, 0.0],
    [-1.499, -1.166, 0.153],
    [-0.888, -1.429, 0.153],
    [-0.876, -1.402, 0.153],
    [-1.485, -1.137, 0.153],
    [-1.485, -1.137, 0.291],
    [-0.876, -1.402, 0.291],
    [-0.755, -1.121, 0.291],
    [-1.356, -0.855, 0.291],
    [-1.391, -0.974, 0.291],
    [-1.350, -0.992, 0.291],
    [-1.381, -1.059, 0.291],
    [-1.216, -1.132, 0.291],
    [-1.170, -1.031, 0.291],
    [-1.286, -0.975, 0.291],
    [-1.272, -0.944, 0.291],
    [-1.360, -0.906, 0.291],
    [-1.391, -0.974, 0.347],
    [-1.350, -0.992, 0.347],
    [-1.381, -1.059, 0.347],
    [-1.216, -1.132, 0.347],
    [-1.170, -1.031, 0.347],
    [-1.286, -0.975, 0.347],
    [-1.272, -0.944, 0.347],
    [-1.360, -0.906, 0.347],
    [-1.103, -1.157, 0.291],
    [-0.905, -1.244, 0.291],
    [-0.860, -1.142, 0.291],
    [-1.058, -1.055, 0.291],
    [-1.103, -1.157, 0.347],
    [-0.905, -1.244, 0.347],
    [-0.860, -1.142, 0.347],
    [-1.058, -1.055, 0.347],
    [-0.985, -1.169, 0.347],
    [-0.919, -1.198, 0.347],
    [-0.901, -1.157, 0.347],
    [-0.967, -1.128, 0.347],
    [-0.985, -1.169, 0.291],
    [-0.919, -1.198, 0.291],
    [-0.901, -1.157, 0.291],
    [-0.967, -1.128, 0.291],
];

pub(crate) const BAY_HALL_VERTEX_ORDER: &[u32] = &[
    0, 1, 4, 5, 4, 5, 7, 6,
    7, 6, 8, 9, 2, 3, 10, 11,
    1, 2, 10, 9, 6, 5, 3, 0,
    4, 7, 8, 11, 8, 9, 10, 11,
    12, 13, 14, 15, 16, 17, 18, 19,
    28, 29, 30, 31, 12, 13, 20, 21,
    13, 14, 21, 22, 14, 15, 22, 23,
    15, 16, 23, 24, 16, 17, 24, 25,
    17, 18, 25, 26, 18, 19, 26, 27,
    19, 12, 27, 20, 28, 29, 32, 33,
    29, 30, 33, 34, 30, 31, 34, 35,
    31, 28, 35, 32, 20, 21, 22, 23,
    24, 25, 26, 27, 32, 33, 34, 35,
    36, 37, 38, 39, 41, 40, 37, 36,
    42, 41, 38, 37, 43, 42, 39, 38,
    40, 43, 36, 39, 40, 41, 43, 42,
];

pub(crate) const BAY_HALL_TRIANGLES: &[u32] = &[
    0, 1, 2, 3, 2, 1,
    4, 5, 6, 7, 6, 5,
    8, 9, 10, 11, 10, 9,
    12, 13, 14, 15, 14, 13,
    16, 17, 20, 16, 20, 21,
    17, 18, 20, 18, 19, 20,
    22, 23, 25, 23, 24, 25,
    22, 25, 27, 25, 26, 27,
    28, 29, 35, 29, 40, 35,
    28, 35, 34, 29, 41, 40,
    28, 34, 32, 29, 30, 41,
    28, 32, 31, 30, 42, 41,
    31, 32, 39, 30, 43, 42,
    31, 39, 38, 30, 31, 43,
    31, 38, 43, 32, 34, 33,
    35, 40, 36, 40, 43, 36,
    36, 43, 38, 36, 38, 37,
    44, 45, 46, 47, 46, 45,
    48, 49, 50, 51, 50, 49,
    52, 53, 54, 55, 54, 53,
    56, 57, 58, 59, 58, 57,
    60, 61, 62, 63, 62, 61,
    64, 65, 66, 67, 66, 65,
    68, 69, 70, 71, 70, 69,
    72, 73, 74, 75, 74, 73,
    76, 77, 78, 79, 78, 77,
    80, 81, 82, 83, 82, 81,
    84, 85, 86, 87, 86, 85,
    88, 89, 90, 91, 90, 89,
    92, 93, 99, 93, 98, 99,
    93, 97, 98, 93, 94, 97,
    94, 95, 97, 95, 96, 97,
    100, 101, 104, 101, 105, 104,
    101, 102, 105, 102, 106, 105,
    102, 107, 106, 102, 103, 107,
    103, 104, 107, 100, 104, 103,
    108, 109, 110, 111, 110, 109,
    112, 113, 114, 115, 114, 113,
    116, 117, 118, 119, 118, 117,
    120, 121, 122, 123, 122, 121,
    124, 125, 126, 127, 126, 125,
];

pub(crate) const GROUND_CORNERS: &[[f32; 3]] = &[
    [0.5, 0.5, 0.0],
    [-0.5, 0.5, 0.0],
    [-0.5, -0.5, 0.0],
    [0.5, -0.5, 0.0],
];

pub(crate) const GROUND_TRIANGLES: &[u32] = &[0, 1, 2, 0, 2, 3];
