mod ipv4;
