mod multitest;
