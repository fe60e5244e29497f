//! Built-in nearest neighbor parameters: the Mathews-Turner 1999 rule set
//! (free energies at 37 C and enthalpies, centi-kcal/mol). Tabulated 1x1,
//! 2x1 and 2x2 interior loops are not part of this data set; see
//! [`EnergyTables::turner`](crate::EnergyTables::turner) for how those
//! entries are estimated.

use crate::energy_tables::INF;

pub(crate) const LXC37: f64 = 107.856;
pub(crate) const ML_INTERN37: i32 = -90;
pub(crate) const ML_INTERN_DH: i32 = -220;
pub(crate) const ML_CLOSING37: i32 = 930;
pub(crate) const ML_CLOSING_DH: i32 = 3000;
pub(crate) const ML_BASE37: i32 = 0;
pub(crate) const ML_BASE_DH: i32 = 0;
pub(crate) const MAX_NINIO: i32 = 300;
pub(crate) const NINIO37: i32 = 60;
pub(crate) const NINIO_DH: i32 = 320;
pub(crate) const TERMINAL_AU37: i32 = 50;
pub(crate) const TERMINAL_AU_DH: i32 = 370;
pub(crate) const DUPLEX_INIT37: i32 = 410;
pub(crate) const DUPLEX_INIT_DH: i32 = 360;

pub(crate) const STACK37: [[i32; 8]; 8] = [
    [   INF,    INF,    INF,    INF,    INF,    INF,    INF,    INF],
    [   INF,   -240,   -330,   -210,   -140,   -210,   -210,   -140],
    [   INF,   -330,   -340,   -250,   -150,   -220,   -240,   -150],
    [   INF,   -210,   -250,    130,    -50,   -140,   -130,    130],
    [   INF,   -140,   -150,    -50,     30,    -60,   -100,     30],
    [   INF,   -210,   -220,   -140,    -60,   -110,    -90,    -60],
    [   INF,   -210,   -240,   -130,   -100,    -90,   -130,    -90],
    [   INF,   -140,   -150,    130,     30,    -60,    -90,    130],
];
pub(crate) const STACK_DH: [[i32; 8]; 8] = [
    [   INF,    INF,    INF,    INF,    INF,    INF,    INF,    INF],
    [   INF,  -1060,  -1340,  -1210,   -560,  -1050,  -1040,   -560],
    [   INF,  -1340,  -1490,  -1260,   -830,  -1140,  -1240,   -830],
    [   INF,  -1210,  -1260,  -1460,  -1350,   -880,  -1280,   -880],
    [   INF,   -560,   -830,  -1350,   -930,   -320,   -700,   -320],
    [   INF,  -1050,  -1140,   -880,   -320,   -940,   -680,   -320],
    [   INF,  -1040,  -1240,  -1280,   -700,   -680,   -770,   -680],
    [   INF,   -560,   -830,   -880,   -320,   -320,   -680,   -320],
];

pub(crate) const HAIRPIN37: [i32; 31] = [
       INF,    INF,    INF,    540,    560,    570,    540,    600,    550,    640,
       650,    660,    670,    680,    690,    690,    700,    710,    710,    720,
       720,    730,    730,    740,    740,    750,    750,    750,    760,    760,
       770,
];
pub(crate) const HAIRPIN_DH: [i32; 31] = [
       INF,    INF,    INF,    130,    480,    360,   -290,    130,   -290,    500,
       500,    500,    500,    500,    500,    500,    500,    500,    500,    500,
       500,    500,    500,    500,    500,    500,    500,    500,    500,    500,
       500,
];
pub(crate) const BULGE37: [i32; 31] = [
       INF,    380,    280,    320,    360,    400,    440,    460,    470,    480,
       490,    500,    510,    520,    530,    540,    540,    550,    550,    560,
       570,    570,    580,    580,    580,    590,    590,    600,    600,    600,
       610,
];
pub(crate) const BULGE_DH: [i32; 31] = [
       INF,   1060,    710,    710,    710,    710,    710,    710,    710,    710,
       710,    710,    710,    710,    710,    710,    710,    710,    710,    710,
       710,    710,    710,    710,    710,    710,    710,    710,    710,    710,
       710,
];
pub(crate) const INTERNAL_LOOP37: [i32; 31] = [
       INF,    INF,    INF,    INF,    110,    200,    200,    210,    230,    240,
       250,    260,    270,    280,    290,    290,    300,    310,    310,    320,
       330,    330,    340,    340,    350,    350,    350,    360,    360,    370,
       370,
];
pub(crate) const INTERNAL_LOOP_DH: [i32; 31] = [
       INF,    INF,    INF,    INF,   -720,   -680,   -130,   -130,   -130,   -130,
      -130,   -130,   -130,   -130,   -130,   -130,   -130,   -130,   -130,   -130,
      -130,   -130,   -130,   -130,   -130,   -130,   -130,   -130,   -130,   -130,
      -130,
];

pub(crate) const MISMATCH_HAIRPIN37: [[[i32; 5]; 5]; 8] = [
    [
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
    ],
    [
        [   -80,   -100,   -110,   -100,    -80],
        [  -140,   -150,   -150,   -140,   -150],
        [   -80,   -100,   -110,   -100,    -80],
        [  -150,   -230,   -150,   -240,   -150],
        [  -100,   -100,   -140,   -100,   -210],
    ],
    [
        [   -50,   -110,    -70,   -110,    -50],
        [  -110,   -110,   -150,   -130,   -150],
        [   -50,   -110,    -70,   -110,    -50],
        [  -150,   -250,   -150,   -220,   -150],
        [  -100,   -110,   -100,   -110,   -160],
    ],
    [
        [    20,     20,    -20,    -10,    -20],
        [    20,     20,    -50,    -30,    -50],
        [   -10,    -10,    -20,    -10,    -20],
        [   -50,   -100,    -50,   -110,    -50],
        [   -10,    -10,    -30,    -10,   -100],
    ],
    [
        [     0,    -20,    -10,    -20,      0],
        [   -30,    -50,    -30,    -60,    -30],
        [     0,    -20,    -10,    -20,      0],
        [   -30,    -90,    -30,   -110,    -30],
        [   -10,    -20,    -10,    -20,    -90],
    ],
    [
        [   -10,    -10,    -20,    -10,    -20],
        [   -30,    -30,    -50,    -30,    -50],
        [   -10,    -10,    -20,    -10,    -20],
        [   -50,   -120,    -50,   -110,    -50],
        [   -10,    -10,    -30,    -10,   -120],
    ],
    [
        [     0,    -20,    -10,    -20,      0],
        [   -30,    -50,    -30,    -50,    -30],
        [     0,    -20,    -10,    -20,      0],
        [   -30,   -150,    -30,   -150,    -30],
        [   -10,    -20,    -10,    -20,    -90],
    ],
    [
        [    20,     20,    -10,    -10,      0],
        [    20,     20,    -30,    -30,    -30],
        [     0,    -10,    -10,    -10,      0],
        [   -30,    -90,    -30,   -110,    -30],
        [   -10,    -10,    -10,    -10,    -90],
    ],
];
pub(crate) const MISMATCH_HAIRPIN_DH: [[[i32; 5]; 5]; 8] = [
    [
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
    ],
    [
        [   560,   -570,    560,   -560,   -270],
        [  -560,   -910,   -560,   -560,   -560],
        [  -270,   -570,   -340,   -570,   -270],
        [   560,  -1400,    560,   -920,   -560],
        [  -530,   -570,   -530,   -570,  -1440],
    ],
    [
        [    50,   -520,     50,   -560,   -400],
        [  -400,   -520,   -400,   -560,   -400],
        [    50,   -720,     50,   -720,   -420],
        [  -400,  -1290,   -400,   -620,   -400],
        [   -30,   -720,    -30,   -720,  -1080],
    ],
    [
        [   970,    140,    970,    140,    570],
        [   570,     30,    570,     20,    570],
        [   970,    140,    970,    140,    340],
        [   570,   -270,    570,     20,    570],
        [   830,    140,    830,    140,    -50],
    ],
    [
        [   230,    100,    230,    220,    190],
        [  -110,   -110,   -260,   -520,   -260],
        [   190,    -60,   -140,    -60,    190],
        [   220,    100,   -260,    220,   -260],
        [   230,    -60,    230,    -60,    -70],
    ],
    [
        [   970,    140,    970,    140,    570],
        [   570,    -20,    570,     20,    570],
        [   970,    140,    970,    140,    340],
        [   570,   -520,    570,     20,    570],
        [   830,    140,    830,    140,   -380],
    ],
    [
        [   230,    -30,    230,    -60,    190],
        [   -30,    -30,   -260,   -520,   -260],
        [   190,    -60,   -140,    -60,    190],
        [  -260,   -590,   -260,   -520,   -260],
        [   230,    -60,    230,    -60,    -70],
    ],
    [
        [   970,    140,    970,    220,    570],
        [   570,     30,    570,     20,    570],
        [   970,    140,    970,    140,    340],
        [   570,    100,    570,    220,    570],
        [   830,    140,    830,    140,    -50],
    ],
];
pub(crate) const MISMATCH_INTERIOR37: [[[i32; 5]; 5]; 8] = [
    [
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
    ],
    [
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,    -80,      0],
        [     0,      0,      0,      0,      0],
        [     0,   -100,      0,   -100,      0],
        [     0,      0,      0,      0,    -60],
    ],
    [
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,    -80,      0],
        [     0,      0,      0,      0,      0],
        [     0,   -100,      0,   -100,      0],
        [     0,      0,      0,      0,    -60],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,    -10,     70],
        [    70,     70,     70,     70,     70],
        [    70,    -30,     70,    -30,     70],
        [    70,     70,     70,     70,     10],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,    -10,     70],
        [    70,     70,     70,     70,     70],
        [    70,    -30,     70,    -30,     70],
        [    70,     70,     70,     70,     10],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,    -10,     70],
        [    70,     70,     70,     70,     70],
        [    70,    -30,     70,    -30,     70],
        [    70,     70,     70,     70,     10],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,    -10,     70],
        [    70,     70,     70,     70,     70],
        [    70,    -30,     70,    -30,     70],
        [    70,     70,     70,     70,     10],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,    -10,     70],
        [    70,     70,     70,     70,     70],
        [    70,    -30,     70,    -30,     70],
        [    70,     70,     70,     70,     10],
    ],
];
pub(crate) const MISMATCH_INTERIOR_DH: [[[i32; 5]; 5]; 8] = [
    [
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
    ],
    [
        [   280,      0,      0,    280,      0],
        [     0,      0,      0,   -340,      0],
        [     0,      0,      0,      0,      0],
        [   280,   -760,      0,    280,      0],
        [     0,      0,      0,      0,   -580],
    ],
    [
        [   280,      0,      0,    280,      0],
        [     0,      0,      0,   -340,      0],
        [     0,      0,      0,      0,      0],
        [   280,   -760,      0,    280,      0],
        [     0,      0,      0,      0,   -580],
    ],
    [
        [   790,    500,    500,    790,    500],
        [   500,    500,    500,    170,    500],
        [   500,    500,    500,    500,    500],
        [   790,   -260,    500,    790,    500],
        [   500,    500,    500,    500,    -80],
    ],
    [
        [   790,    500,    500,    790,    500],
        [   500,    500,    500,    170,    500],
        [   500,    500,    500,    500,    500],
        [   790,   -260,    500,    790,    500],
        [   500,    500,    500,    500,    -80],
    ],
    [
        [   790,    500,    500,    790,    500],
        [   500,    500,    500,    170,    500],
        [   500,    500,    500,    500,    500],
        [   790,   -260,    500,    790,    500],
        [   500,    500,    500,    500,    -80],
    ],
    [
        [   790,    500,    500,    790,    500],
        [   500,    500,    500,    170,    500],
        [   500,    500,    500,    500,    500],
        [   790,   -260,    500,    790,    500],
        [   500,    500,    500,    500,    -80],
    ],
    [
        [   790,    500,    500,    790,    500],
        [   500,    500,    500,    170,    500],
        [   500,    500,    500,    500,    500],
        [   790,   -260,    500,    790,    500],
        [   500,    500,    500,    500,    -80],
    ],
];
pub(crate) const MISMATCH_INTERIOR_1N37: [[[i32; 5]; 5]; 8] = [
    [
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
    ],
    [
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
    ],
    [
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
    ],
];
pub(crate) const MISMATCH_INTERIOR_1N_DH: [[[i32; 5]; 5]; 8] = [
    [
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
    ],
    [
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
    ],
    [
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
    ],
    [
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
    ],
    [
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
    ],
    [
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
    ],
    [
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
    ],
    [
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
    ],
];
pub(crate) const MISMATCH_INTERIOR_23_37: [[[i32; 5]; 5]; 8] = [
    [
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
    ],
    [
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,    -50,      0],
        [     0,      0,      0,      0,      0],
        [     0,   -110,      0,    -70,      0],
        [     0,      0,      0,      0,    -30],
    ],
    [
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,   -120,      0,    -70,      0],
        [     0,      0,      0,      0,    -30],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,    -40,     70,      0,     70],
        [    70,     70,     70,     70,     40],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     20,     70],
        [    70,     70,     70,     70,     70],
        [    70,    -40,     70,      0,     70],
        [    70,     70,     70,     70,     40],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,    -40,     70,      0,     70],
        [    70,     70,     70,     70,     40],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     20,     70],
        [    70,     70,     70,     70,     70],
        [    70,    -40,     70,      0,     70],
        [    70,     70,     70,     70,     40],
    ],
    [
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,     70,     70,     70,     70],
        [    70,    -40,     70,      0,     70],
        [    70,     70,     70,     70,     40],
    ],
];
pub(crate) const MISMATCH_INTERIOR_23_DH: [[[i32; 5]; 5]; 8] = [
    [
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
    ],
    [
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,   -570,      0],
        [     0,      0,      0,      0,      0],
        [     0,   -860,      0,   -900,      0],
        [     0,      0,      0,      0,   -640],
    ],
    [
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,      0,      0,      0,      0],
        [     0,  -1090,      0,   -900,      0],
        [     0,      0,      0,      0,   -640],
    ],
    [
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,   -580,    500,   -400,    500],
        [   500,    500,    500,    500,   -140],
    ],
    [
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    -60,    500],
        [   500,    500,    500,    500,    500],
        [   500,   -360,    500,   -400,    500],
        [   500,    500,    500,    500,   -140],
    ],
    [
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,   -580,    500,   -400,    500],
        [   500,    500,    500,    500,   -140],
    ],
    [
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    -60,    500],
        [   500,    500,    500,    500,    500],
        [   500,   -360,    500,   -400,    500],
        [   500,    500,    500,    500,   -140],
    ],
    [
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,    500,    500,    500,    500],
        [   500,   -360,    500,   -400,    500],
        [   500,    500,    500,    500,   -140],
    ],
];
pub(crate) const MISMATCH_MULTI37: [[[i32; 5]; 5]; 8] = [
    [
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
    ],
    [
        [   -80,   -100,   -110,   -100,    -80],
        [  -140,   -150,   -150,   -140,   -150],
        [   -80,   -100,   -110,   -100,    -80],
        [  -140,   -140,   -150,   -160,   -150],
        [  -100,   -100,   -140,   -100,   -120],
    ],
    [
        [   -50,   -110,    -70,   -110,    -50],
        [  -110,   -110,   -150,   -130,   -150],
        [   -50,   -110,    -70,   -110,    -50],
        [  -140,   -160,   -150,   -140,   -150],
        [   -70,   -110,   -100,   -110,    -70],
    ],
    [
        [   -30,    -30,    -70,    -60,    -60],
        [   -30,    -30,   -100,    -80,   -100],
        [   -60,    -60,    -70,    -60,    -70],
        [   -60,    -60,   -100,    -80,   -100],
        [   -60,    -60,    -80,    -60,    -60],
    ],
    [
        [   -50,    -50,    -60,    -70,    -50],
        [   -80,   -100,    -80,   -110,    -80],
        [   -50,    -70,    -60,    -70,    -50],
        [   -50,    -50,    -80,    -80,    -80],
        [   -50,    -70,    -60,    -70,    -50],
    ],
    [
        [   -60,    -60,    -70,    -60,    -70],
        [   -80,    -80,   -100,    -80,   -100],
        [   -60,    -60,    -70,    -60,    -70],
        [   -80,    -80,   -100,    -80,   -100],
        [   -60,    -60,    -80,    -60,    -80],
    ],
    [
        [   -50,    -70,    -60,    -70,    -50],
        [   -80,   -100,    -80,   -110,    -80],
        [   -50,    -70,    -60,    -70,    -50],
        [   -80,   -110,    -80,   -120,    -80],
        [   -50,    -70,    -60,    -70,    -50],
    ],
    [
        [   -30,    -30,    -60,    -60,    -50],
        [   -30,    -30,    -80,    -80,    -80],
        [   -50,    -60,    -60,    -60,    -50],
        [   -50,    -50,    -80,    -80,    -80],
        [   -50,    -60,    -60,    -60,    -50],
    ],
];
pub(crate) const MISMATCH_MULTI_DH: [[[i32; 5]; 5]; 8] = [
    [
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
    ],
    [
        [  -270,   -570,   -340,   -560,   -270],
        [  -560,   -910,   -560,   -560,   -560],
        [  -270,   -570,   -340,   -570,   -270],
        [  -560,   -820,   -560,   -920,   -560],
        [  -530,   -570,   -530,   -570,   -860],
    ],
    [
        [    50,   -520,     50,   -560,   -400],
        [  -400,   -520,   -400,   -560,   -400],
        [    50,   -720,     50,   -720,   -420],
        [  -400,   -710,   -400,   -620,   -400],
        [   -30,   -720,    -30,   -720,   -500],
    ],
    [
        [   600,    -60,    600,   -230,    200],
        [   200,   -340,    200,   -350,    200],
        [   600,   -230,    600,   -230,    -30],
        [   200,    -60,    200,   -350,    200],
        [   460,   -230,    460,   -230,    160],
    ],
    [
        [   310,    310,   -140,   -150,    140],
        [  -480,   -480,   -630,   -890,   -630],
        [  -180,   -430,   -510,   -430,   -180],
        [   310,    310,   -630,   -150,   -630],
        [   140,   -430,   -140,   -430,    140],
    ],
    [
        [   600,   -230,    600,   -230,    200],
        [   200,   -390,    200,   -350,    200],
        [   600,   -230,    600,   -230,    -30],
        [   200,   -310,    200,   -350,    200],
        [   460,   -230,    460,   -230,   -170],
    ],
    [
        [   140,   -380,   -140,   -430,    140],
        [  -400,   -400,   -630,   -890,   -630],
        [  -180,   -430,   -510,   -430,   -180],
        [  -380,   -380,   -630,   -890,   -630],
        [   140,   -430,   -140,   -430,    140],
    ],
    [
        [   600,    310,    600,   -150,    200],
        [   200,   -340,    200,   -350,    200],
        [   600,   -230,    600,   -230,    -30],
        [   310,    310,    200,   -150,    200],
        [   460,   -230,    460,   -230,    160],
    ],
];
pub(crate) const MISMATCH_EXTERIOR37: [[[i32; 5]; 5]; 8] = [
    [
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
    ],
    [
        [   -80,   -100,   -110,   -100,    -80],
        [  -140,   -150,   -150,   -140,   -150],
        [   -80,   -100,   -110,   -100,    -80],
        [  -140,   -140,   -150,   -160,   -150],
        [  -100,   -100,   -140,   -100,   -120],
    ],
    [
        [   -50,   -110,    -70,   -110,    -50],
        [  -110,   -110,   -150,   -130,   -150],
        [   -50,   -110,    -70,   -110,    -50],
        [  -140,   -160,   -150,   -140,   -150],
        [   -70,   -110,   -100,   -110,    -70],
    ],
    [
        [   -30,    -30,    -70,    -60,    -60],
        [   -30,    -30,   -100,    -80,   -100],
        [   -60,    -60,    -70,    -60,    -70],
        [   -60,    -60,   -100,    -80,   -100],
        [   -60,    -60,    -80,    -60,    -60],
    ],
    [
        [   -50,    -50,    -60,    -70,    -50],
        [   -80,   -100,    -80,   -110,    -80],
        [   -50,    -70,    -60,    -70,    -50],
        [   -50,    -50,    -80,    -80,    -80],
        [   -50,    -70,    -60,    -70,    -50],
    ],
    [
        [   -60,    -60,    -70,    -60,    -70],
        [   -80,    -80,   -100,    -80,   -100],
        [   -60,    -60,    -70,    -60,    -70],
        [   -80,    -80,   -100,    -80,   -100],
        [   -60,    -60,    -80,    -60,    -80],
    ],
    [
        [   -50,    -70,    -60,    -70,    -50],
        [   -80,   -100,    -80,   -110,    -80],
        [   -50,    -70,    -60,    -70,    -50],
        [   -80,   -110,    -80,   -120,    -80],
        [   -50,    -70,    -60,    -70,    -50],
    ],
    [
        [   -30,    -30,    -60,    -60,    -50],
        [   -30,    -30,    -80,    -80,    -80],
        [   -50,    -60,    -60,    -60,    -50],
        [   -50,    -50,    -80,    -80,    -80],
        [   -50,    -60,    -60,    -60,    -50],
    ],
];
pub(crate) const MISMATCH_EXTERIOR_DH: [[[i32; 5]; 5]; 8] = [
    [
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
        [   INF,    INF,    INF,    INF,    INF],
    ],
    [
        [  -270,   -570,   -340,   -560,   -270],
        [  -560,   -910,   -560,   -560,   -560],
        [  -270,   -570,   -340,   -570,   -270],
        [  -560,   -820,   -560,   -920,   -560],
        [  -530,   -570,   -530,   -570,   -860],
    ],
    [
        [    50,   -520,     50,   -560,   -400],
        [  -400,   -520,   -400,   -560,   -400],
        [    50,   -720,     50,   -720,   -420],
        [  -400,   -710,   -400,   -620,   -400],
        [   -30,   -720,    -30,   -720,   -500],
    ],
    [
        [   600,    -60,    600,   -230,    200],
        [   200,   -340,    200,   -350,    200],
        [   600,   -230,    600,   -230,    -30],
        [   200,    -60,    200,   -350,    200],
        [   460,   -230,    460,   -230,    160],
    ],
    [
        [   310,    310,   -140,   -150,    140],
        [  -480,   -480,   -630,   -890,   -630],
        [  -180,   -430,   -510,   -430,   -180],
        [   310,    310,   -630,   -150,   -630],
        [   140,   -430,   -140,   -430,    140],
    ],
    [
        [   600,   -230,    600,   -230,    200],
        [   200,   -390,    200,   -350,    200],
        [   600,   -230,    600,   -230,    -30],
        [   200,   -310,    200,   -350,    200],
        [   460,   -230,    460,   -230,   -170],
    ],
    [
        [   140,   -380,   -140,   -430,    140],
        [  -400,   -400,   -630,   -890,   -630],
        [  -180,   -430,   -510,   -430,   -180],
        [  -380,   -380,   -630,   -890,   -630],
        [   140,   -430,   -140,   -430,    140],
    ],
    [
        [   600,    310,    600,   -150,    200],
        [   200,   -340,    200,   -350,    200],
        [   600,   -230,    600,   -230,    -30],
        [   310,    310,    200,   -150,    200],
        [   460,   -230,    460,   -230,    160],
    ],
];

pub(crate) const DANGLE5_37: [[i32; 5]; 8] = [
    [   INF,    INF,    INF,    INF,    INF],
    [     0,    -20,    -30,      0,      0],
    [   -10,    -50,    -30,    -20,    -10],
    [   -10,    -30,    -10,    -20,    -20],
    [   -20,    -30,    -30,    -40,    -20],
    [   -10,    -30,    -10,    -20,    -20],
    [   -20,    -30,    -30,    -40,    -20],
    [     0,    -20,    -10,      0,      0],
];
pub(crate) const DANGLE5_DH: [[i32; 5]; 8] = [
    [   INF,    INF,    INF,    INF,    INF],
    [    70,   -160,     70,   -460,    -40],
    [   330,   -240,    330,     80,   -140],
    [   690,    -50,    690,     60,     60],
    [   310,    160,    220,     70,    310],
    [   690,    -50,    690,     60,     60],
    [   310,    160,    220,     70,    310],
    [   690,    160,    690,     80,    310],
];
pub(crate) const DANGLE3_37: [[i32; 5]; 8] = [
    [   INF,    INF,    INF,    INF,    INF],
    [   -80,   -170,    -80,   -170,   -120],
    [   -40,   -110,    -40,   -130,    -60],
    [   -50,    -80,    -50,    -80,    -60],
    [   -10,    -70,    -10,    -70,    -10],
    [   -50,    -80,    -50,    -80,    -60],
    [   -10,    -70,    -10,    -70,    -10],
    [   -10,    -70,    -10,    -70,    -10],
];
pub(crate) const DANGLE3_DH: [[i32; 5]; 8] = [
    [   INF,    INF,    INF,    INF,    INF],
    [  -410,   -900,   -410,   -860,   -750],
    [  -280,   -740,   -280,   -640,   -360],
    [   -90,   -490,    -90,   -550,   -230],
    [   -70,   -570,    -70,   -580,   -220],
    [   -90,   -490,    -90,   -550,   -230],
    [   -70,   -570,    -70,   -580,   -220],
    [   -70,   -490,    -70,   -550,   -220],
];

pub(crate) const TRILOOPS: [(&str, i32, i32); 2] = [
    ("CAACG",   680,   2370),
    ("GUUAC",   690,   1080),
];
pub(crate) const TETRALOOPS: [(&str, i32, i32); 16] = [
    ("CAACGG",   550,    690),
    ("CCAAGG",   330,  -1030),
    ("CCACGG",   370,   -330),
    ("CCCAGG",   340,   -890),
    ("CCGAGG",   350,   -660),
    ("CCGCGG",   360,   -750),
    ("CCUAGG",   370,   -350),
    ("CCUCGG",   250,  -1390),
    ("CUAAGG",   360,   -760),
    ("CUACGG",   280,  -1070),
    ("CUCAGG",   370,   -660),
    ("CUCCGG",   270,  -1290),
    ("CUGCGG",   280,  -1070),
    ("CUUAGG",   350,   -620),
    ("CUUCGG",   370,  -1530),
    ("CUUUGG",   370,   -680),
];
pub(crate) const HEXALOOPS: [(&str, i32, i32); 4] = [
    ("ACAGUACU",   280,  -1680),
    ("ACAGUGAU",   360,  -1140),
    ("ACAGUGCU",   290,  -1280),
    ("ACAGUGUU",   180,  -1540),
];
